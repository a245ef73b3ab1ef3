#![cfg(test)]

use super::*;

#[derive(Debug, Default)]
struct TestObject {
    i: i32,
    name: String,
    hidden: bool,
}

crate::reflect!(TestObject { i, name });

struct Empty;

crate::reflect!(Empty {});

#[test]
fn test_name_and_properties() {
    let mut t = TestObject::default();
    let object = Object::new(&mut t);
    assert_eq!(object.name(), "TestObject");
    assert_eq!(object.property_names().collect::<Vec<_>>(), ["i", "name"]);

    assert_eq!(TestObject::NAME, "TestObject");
    assert_eq!(TestObject::properties().len(), 2);
    assert_eq!(TestObject::find_property("name").map(Property::name), Some("name"));
    assert!(TestObject::find_property("hidden").is_none(), "Unlisted fields aren't registered.");
}

#[test]
fn test_get_and_set() {
    let mut t = TestObject::default();
    t.i = 1;
    {
        let mut object = Object::new(&mut t);
        assert_eq!(object.property::<i32>("i"), Ok(&1));

        object.set_property("i", 2).unwrap();
        object.set_property("name", String::from("renamed")).unwrap();
        object.property_mut::<String>("name").unwrap().push('!');
        assert_eq!(object.get().i, 2);
        object.get_mut().hidden = true;
    }
    assert_eq!(t.i, 2);
    assert_eq!(t.name, "renamed!");
    assert!(t.hidden);
}

#[test]
fn test_errors() {
    let mut t = TestObject::default();
    let mut object = Object::new(&mut t);

    let error = object.property::<i32>("missing").unwrap_err();
    assert_eq!(
        error,
        PropertyError::UnknownProperty(UnknownProperty {
            object: "TestObject",
            property: String::from("missing"),
        })
    );
    assert_eq!(error.to_string(), "TestObject has no property named \"missing\"");

    let error = object.set_property("i", 2_u8).unwrap_err();
    assert!(error.is_type_mismatch());
    assert_eq!(error.to_string(), "property TestObject::i is not of type u8");
    assert_eq!(object.property::<i32>("i"), Ok(&0), "A failed write shouldn't change the object.");

    let mut empty = Empty;
    let object = Object::new(&mut empty);
    assert_eq!(object.property_names().count(), 0);
    assert!(object.property::<i32>("i").unwrap_err().is_unknown_property());
}

#[test]
fn test_debug() {
    let mut t = TestObject::default();
    let object = Object::new(&mut t);
    assert_eq!(
        format!("{object:?}"),
        "Object { name: \"TestObject\", properties: [Property { name: \"i\", .. }, \
         Property { name: \"name\", .. }] }"
    );
}
