use serval::{
    Definition, FloatField, IntField, MethodField, Nested, Object, StrField, Value, map,
    value::to_value,
};

struct Author {
    first: &'static str,
    last: &'static str,
}

impl Object for Author {
    fn get_attr(&self, name: &str) -> Option<Value> {
        match name {
            "first" => Some(self.first.into()),
            "last" => Some(self.last.into()),
            _ => None,
        }
    }
}

#[derive(serde::Serialize)]
struct Book {
    title: &'static str,
    pages: &'static str,
    rating: f32,
}

fn main() -> serval::Result<()> {
    let author = Definition::builder("Author")
        .field("name", MethodField::new())
        .method("get_name", |_, author| {
            let first = author.get_attr("first").unwrap_or_default();
            let last = author.get_attr("last").unwrap_or_default();
            Ok(format!("{} {}", first, last).into())
        })
        .build()?;

    let book = Definition::dict("Book")
        .field("title", StrField::new())
        .field("pages", IntField::new())
        .field("rating", FloatField::new())
        .field("author", Nested::new(&author).optional())
        .build()?;

    let mut subject = to_value(&Book {
        title: "The Serval",
        pages: "312",
        rating: 4.5,
    })?;
    subject.set(
        "author",
        Value::object(Author {
            first: "Rasmus",
            last: "Kildevæld",
        }),
    );

    let out = book.serialize(subject)?;
    println!("{}", serde_json::to_string_pretty(&out).map_err(serval::Error::custom)?);

    let many = book.serialize_many([map! { "title": "Untitled", "pages": 1, "rating": 0 }])?;
    println!("{}", serde_json::to_string(&many).map_err(serval::Error::custom)?);

    Ok(())
}
