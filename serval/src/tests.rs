use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    Definition, FloatField, IntField, MethodField, Nested, Object, Serializer, StrField, Value,
    ValueField, list, map,
};

struct Person {
    name: &'static str,
    age: Value,
    nickname: Option<&'static str>,
    pet: Option<Value>,
}

impl Object for Person {
    fn get_attr(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.into()),
            "age" => Some(self.age.clone()),
            "nickname" => self.nickname.map(Value::from),
            "pet" => self.pet.clone(),
            "greeting" => {
                let name = self.name;
                Some(Value::function(move || Ok(format!("Hello, {}", name).into())))
            }
            _ => None,
        }
    }

    fn type_name(&self) -> &str {
        "Person"
    }
}

struct Pet {
    name: &'static str,
}

impl Object for Pet {
    fn get_attr(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(self.name.into()),
            _ => None,
        }
    }
}

fn person(name: &'static str, age: impl Into<Value>) -> Value {
    Value::object(Person {
        name,
        age: age.into(),
        nickname: None,
        pet: None,
    })
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_map()
        .map(|map| map.keys().map(|key| key.as_str()).collect())
        .unwrap_or_default()
}

fn number(value: &Value, key: &str) -> crate::value::Number {
    value[key].as_number().copied().unwrap_or(0.into())
}

#[test]
fn method_fields() {
    let foo = Definition::builder("Foo")
        .field("plus", MethodField::new())
        .field("minus", MethodField::with_method("do_minus"))
        .method("get_plus", |_, foo| {
            Ok((number(foo, "bar") + number(foo, "baz")).into())
        })
        .method("do_minus", |_, foo| {
            Ok((number(foo, "bar") - number(foo, "baz")).into())
        })
        .access(crate::Access::Item)
        .build()
        .unwrap();

    let out = foo.serialize(map! { "bar": 5, "baz": 10 }).unwrap();
    assert_eq!(out, Value::from(map! { "plus": 15, "minus": -5 }));
    assert_eq!(keys(&out), ["plus", "minus"]);
}

#[test]
fn key_based_conversion() {
    let def = Definition::dict("Foo")
        .field("foo", IntField::new())
        .field("bar", FloatField::new())
        .build()
        .unwrap();

    let out = def.serialize(map! { "foo": "5", "bar": "2.2" }).unwrap();
    assert_eq!(out, Value::from(map! { "foo": 5, "bar": 2.2 }));
}

#[test]
fn optional_missing_fields_are_omitted() {
    let def = Definition::builder("Person")
        .field("name", StrField::new())
        .field("nickname", StrField::new().optional())
        .build()
        .unwrap();

    let out = def.serialize(person("Rasmus", 41)).unwrap();
    assert_eq!(keys(&out), ["name"]);

    let out = def
        .serialize(Value::object(Person {
            name: "Rasmus",
            age: 41.into(),
            nickname: Some("Ras"),
            pet: None,
        }))
        .unwrap();
    assert_eq!(out["nickname"], Value::from("Ras"));
}

#[test]
fn required_missing_fields_fail() {
    let def = Definition::builder("Person")
        .field("name", StrField::new())
        .field("nickname", StrField::new())
        .build()
        .unwrap();

    let err = def.serialize(person("Rasmus", 41)).unwrap_err();
    assert!(err.is_retrieval());
    assert_eq!(err.get("field"), Some("nickname"));
}

#[test]
fn required_null_values_are_still_converted() {
    let as_int = Definition::builder("Person")
        .field("age", IntField::new())
        .build()
        .unwrap();
    let err = as_int.serialize(person("Rasmus", Value::Null)).unwrap_err();
    assert!(err.is_conversion());

    let as_str = Definition::builder("Person")
        .field("age", StrField::new())
        .build()
        .unwrap();
    let out = as_str.serialize(person("Rasmus", Value::Null)).unwrap();
    assert_eq!(out["age"], Value::from("null"));

    let called = Definition::builder("Person")
        .field("age", ValueField::new().call(true))
        .build()
        .unwrap();
    let err = called.serialize(person("Rasmus", Value::Null)).unwrap_err();
    assert!(err.is_conversion());
    assert_eq!(err.get("field"), Some("age"));
}

#[test]
fn later_fields_overwrite_shared_labels() {
    let def = Definition::dict("Foo")
        .field("a", ValueField::new())
        .field("b", ValueField::new().label("a"))
        .field("c", ValueField::new())
        .build()
        .unwrap();

    let out = def.serialize(map! { "a": 1, "b": 2, "c": 3 }).unwrap();
    assert_eq!(keys(&out), ["a", "c"]);
    assert_eq!(out["a"], Value::from(2));
}

#[test]
fn optional_null_values_skip_conversion() {
    let def = Definition::builder("Person")
        .field("age", IntField::new().optional().call(true))
        .build()
        .unwrap();

    let out = def.serialize(person("Rasmus", Value::Null)).unwrap();
    assert_eq!(out, Value::from(map! { "age": Value::Null }));
}

#[test]
fn conversion_errors_propagate_for_optional_fields() {
    let def = Definition::builder("Person")
        .field("age", IntField::new().optional())
        .build()
        .unwrap();

    let err = def.serialize(person("Rasmus", "old")).unwrap_err();
    assert!(err.is_conversion());
    assert_eq!(err.get("field"), Some("age"));
}

#[test]
fn callable_values() {
    let def = Definition::builder("Person")
        .field("greeting", StrField::new().call(true))
        .build()
        .unwrap();

    let out = def.serialize(person("Rasmus", 41)).unwrap();
    assert_eq!(out["greeting"], Value::from("Hello, Rasmus"));

    let not_callable = Definition::builder("Person")
        .field("name", ValueField::new().call(true))
        .build()
        .unwrap();
    let err = not_callable.serialize(person("Rasmus", 41)).unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn labels_and_dotted_attributes() {
    let def = Definition::builder("Person")
        .field("name", StrField::new().label("full_name"))
        .field("pet_name", StrField::new().attr("pet.name").optional())
        .build()
        .unwrap();

    let out = def
        .serialize(Value::object(Person {
            name: "Rasmus",
            age: 41.into(),
            nickname: None,
            pet: Some(Value::object(Pet { name: "Kitty" })),
        }))
        .unwrap();
    assert_eq!(out, Value::from(map! { "full_name": "Rasmus", "pet_name": "Kitty" }));

    let out = def.serialize(person("Rasmus", 41)).unwrap();
    assert_eq!(keys(&out), ["full_name"]);
}

#[test]
fn overrides_keep_position() {
    let parent = Definition::dict("Parent")
        .field("a", ValueField::new())
        .field("b", ValueField::new())
        .build()
        .unwrap();

    let child = Definition::builder("Child")
        .extends(&parent)
        .field("c", ValueField::new())
        .field("a", StrField::new())
        .build()
        .unwrap();

    assert_eq!(child.field_names().collect::<Vec<_>>(), ["a", "b", "c"]);

    let out = child.serialize(map! { "a": 1, "b": 2, "c": 3 }).unwrap();
    assert_eq!(keys(&out), ["a", "b", "c"]);
    assert_eq!(out["a"], Value::from("1"));
    assert_eq!(out["b"], Value::from(2));

    // The parent is untouched.
    let out = parent.serialize(map! { "a": 1, "b": 2 }).unwrap();
    assert_eq!(out["a"], Value::from(1));
}

#[test]
fn first_parent_takes_precedence() {
    let first = Definition::dict("First")
        .field("value", StrField::new())
        .build()
        .unwrap();
    let second = Definition::dict("Second")
        .field("value", IntField::new())
        .field("other", ValueField::new())
        .build()
        .unwrap();

    let child = Definition::builder("Child")
        .extends(&first)
        .extends(&second)
        .build()
        .unwrap();

    assert_eq!(child.field_names().collect::<Vec<_>>(), ["value", "other"]);
    let out = child.serialize(map! { "value": 5, "other": true }).unwrap();
    assert_eq!(out["value"], Value::from("5"));
}

#[test]
fn many_preserves_order() {
    let def = Definition::builder("Person")
        .field("name", StrField::new())
        .build()
        .unwrap();

    let out = def
        .serialize_many([person("a", 1), person("b", 2), person("c", 3)])
        .unwrap();

    let names: Vec<&Value> = out
        .as_list()
        .unwrap()
        .iter()
        .map(|item| &item["name"])
        .collect();
    assert_eq!(names, [&Value::from("a"), &Value::from("b"), &Value::from("c")]);

    let empty = def.serialize_many(Vec::<Value>::new()).unwrap();
    assert_eq!(empty, Value::from(list![]));
}

#[test]
fn nested_definitions() {
    let pet = Definition::builder("Pet")
        .field("name", StrField::new())
        .build()
        .unwrap();

    let owner = Definition::dict("Owner")
        .field("name", StrField::new())
        .field("pets", Nested::new(&pet).many(true))
        .field("favorite", pet.clone())
        .build()
        .unwrap();

    let out = owner
        .serialize(map! {
            "name": "Rasmus",
            "pets": list![Value::object(Pet { name: "Kitty" }), Value::object(Pet { name: "Rex" })],
            "favorite": Value::object(Pet { name: "Kitty" }),
        })
        .unwrap();

    assert_eq!(
        out,
        Value::from(map! {
            "name": "Rasmus",
            "pets": list![map! { "name": "Kitty" }, map! { "name": "Rex" }],
            "favorite": map! { "name": "Kitty" },
        })
    );
}

#[test]
fn nested_errors_name_the_inner_field() {
    let pet = Definition::builder("Pet")
        .field("age", IntField::new())
        .build()
        .unwrap();
    let owner = Definition::dict("Owner")
        .field("pet", Nested::new(&pet))
        .build()
        .unwrap();

    let err = owner
        .serialize(map! { "pet": Value::object(Pet { name: "Kitty" }) })
        .unwrap_err();
    assert!(err.is_retrieval());
    assert_eq!(err.get("field"), Some("age"));
}

#[test]
fn compiling_is_deterministic() {
    let build = || {
        Definition::dict("Foo")
            .field("b", StrField::new().label("bee"))
            .field("a", IntField::new())
            .field("c", ValueField::new().optional())
            .build()
            .unwrap()
    };

    let labels = |def: &Definition| {
        def.fields()
            .iter()
            .map(|field| (field.name().to_owned(), field.required()))
            .collect::<Vec<_>>()
    };

    assert_eq!(labels(&build()), labels(&build()));
    assert_eq!(labels(&build())[0].0, "bee");
}

#[test]
fn input_data_is_rejected() {
    let def = Definition::dict("Foo").build().unwrap();
    let err = Serializer::builder(&def)
        .instance(map! {})
        .data(map! { "foo": 1 })
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let serializer = Serializer::builder(&def)
        .instance(map! {})
        .data(Value::Null)
        .build()
        .unwrap();
    assert_eq!(serializer.data().unwrap(), &Value::from(map! {}));
}

#[test]
fn many_requires_a_list() {
    let def = Definition::dict("Foo").build().unwrap();
    let err = Serializer::builder(&def)
        .instance(map! {})
        .many(true)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());

    let serializer = Serializer::builder(&def)
        .instance(list![map! {}])
        .many(true)
        .build()
        .unwrap();
    assert!(serializer.is_many());
    assert_eq!(serializer.data().unwrap(), &Value::from(list![map! {}]));
}

#[test]
fn data_is_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let def = Definition::dict("Counted")
        .field("count", MethodField::new())
        .method("get_count", move |_, _| {
            Ok(counter.fetch_add(1, Ordering::SeqCst).into())
        })
        .build()
        .unwrap();

    let serializer = Serializer::new(&def, map! {});
    let first = serializer.data().unwrap().clone();
    let second = serializer.data().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(serializer.into_data().unwrap(), first);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn methods_see_the_context() {
    let def = Definition::dict("Greeting")
        .field("greeting", MethodField::new())
        .method("get_greeting", |serializer, subject| {
            let prefix = serializer
                .context()
                .and_then(|context| context.get("prefix"))
                .cloned()
                .unwrap_or_else(|| "Hello".into());
            Ok(format!("{}, {}", prefix, subject["name"]).into())
        })
        .build()
        .unwrap();

    let out = Serializer::builder(&def)
        .instance(map! { "name": "Rasmus" })
        .context(map! { "prefix": "Hi" })
        .build()
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(out["greeting"], Value::from("Hi, Rasmus"));

    let out = def.serialize(map! { "name": "Rasmus" }).unwrap();
    assert_eq!(out["greeting"], Value::from("Hello, Rasmus"));
}

#[cfg(feature = "serde")]
#[test]
fn json_output_keeps_field_order() {
    #[derive(serde::Serialize)]
    struct Row {
        id: u32,
        title: &'static str,
        score: f64,
    }

    let def = Definition::dict("Row")
        .field("title", StrField::new())
        .field("id", StrField::new())
        .field("score", IntField::new())
        .build()
        .unwrap();

    let row = crate::value::to_value(&Row {
        id: 7,
        title: "serval",
        score: 9.8,
    })
    .unwrap();

    let out = def.serialize(row).unwrap();
    assert_eq!(
        serde_json::to_string(&out).unwrap(),
        r#"{"title":"serval","id":"7","score":9}"#
    );
}
