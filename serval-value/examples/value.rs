use serval_value::{Value, list, map};

#[derive(serde::Serialize, Debug)]
pub struct Person {
    name: String,
    age: u8,
}

fn main() {
    let user = serval_value::to_value(&Person {
        name: "Rasmus".to_string(),
        age: 41,
    })
    .expect("serialize person");

    println!("Name {}", user["name"]);

    let output: Value = map! {
        "user": user,
        "roles": list!["admin", "editor"],
    }
    .into();

    println!("{}", output);
    println!("{}", serde_json::to_string_pretty(&output).expect("to json"));
}
