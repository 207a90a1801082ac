#[macro_export]
macro_rules! list {
    [$($item:expr),* $(,)?] => {
        {
            #[allow(unused_mut)]
            let mut output = $crate::List::default();
            $(
                output.push($item);
            )*
            output
        }
    };
}

#[macro_export]
macro_rules! map {
    ($($key: literal : $value: expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut output = $crate::Map::default();
            $(
                output.insert($key, $value);
            )*
            output
        }
    };
}
