use nt_core::extends::extends;
use nt_core::record::FieldVisitor;
use nt_core::{name, named_tuple, Any, Extends, Has, Name, NamedTuple, Record, ToJson};
use pretty_assertions::assert_eq;
use serde_json::json;

type Employee = NamedTuple!(Employee { name, age, title });

fn employees() -> Vec<Employee> {
    vec![
        Employee::from_values((String::from("Hyung-Suk"), 20, String::from("Dad"))),
        Employee::from_values((String::from("Yoon-Jung"), 3, String::from("Baby"))),
    ]
}

const _: () = assert!(extends::<Employee, (Name!(title), Name!(name))>());
const _: () = assert!(!extends::<Employee, (Name!(salary),)>());

#[derive(Default)]
struct JsonLines {
    lines: Vec<String>,
}

impl<V: std::fmt::Display> FieldVisitor<V> for JsonLines {
    fn visit(&mut self, name: &'static str, value: &V) {
        self.lines.push(format!("{name:?} : {value}"));
    }
}

#[test]
fn employees_render_field_by_field() {
    let mut employees = employees();
    let age = 30;
    employees[0].assign((name!(age).set(age),));

    let mut rendered = Vec::new();
    for employee in &employees {
        let mut visitor = JsonLines::default();
        employee.for_each_field(&mut visitor);
        rendered.push(format!("{}: {}", employee.tag(), visitor.lines.join(", ")));
    }

    assert_eq!(
        rendered,
        vec![
            r#"Employee: "name" : Hyung-Suk, "age" : 30, "title" : Dad"#,
            r#"Employee: "name" : Yoon-Jung, "age" : 3, "title" : Baby"#,
        ]
    );
}

#[test]
fn employees_render_as_json() {
    assert_eq!(
        employees().to_json().unwrap(),
        json!([
            {"name": "Hyung-Suk", "age": 20, "title": "Dad"},
            {"name": "Yoon-Jung", "age": 3, "title": "Baby"},
        ])
    );
}

fn title_of<R>(record: &R) -> String
where
    R: Extends<(Name!(title),)> + Has<Name!(title), Value = Any>,
{
    record.get_value().to_string()
}

#[test]
fn generic_code_accepts_any_record_with_the_fields() {
    let employees = employees();
    assert_eq!(title_of(&employees[1]), "Baby");

    let band = named_tuple!(Band { "title", members = 4 });
    assert_eq!(title_of(&band), "");
}

#[test]
fn records_compose_with_independent_copies() {
    let header = named_tuple!(id = 7u64);
    let payload = named_tuple!(body = String::from("ping"));
    let mut msg = named_tuple!(Msg { &header, "sent", payload });

    msg[name!(id)] += 1;
    msg[name!(sent)] = true.into();

    assert_eq!(header[name!(id)], 7);
    assert_eq!(<NamedTuple!(Msg { id: u64, sent, body: String }) as Record>::SIZE, 3);
    assert_eq!(msg.to_string(), "Msg{id:8,sent:true,body:ping}");

    let (id, sent, body) = msg.into_tuple();
    assert_eq!(id.name(), "id");
    assert!(sent.into_value().take::<bool>().unwrap());
    assert_eq!(body.into_value(), "ping");
}

#[test]
fn records_are_plain_values() {
    let a = named_tuple!(x = 1, y = 2);
    let mut b = a;
    b[name!(x)] = 10;

    assert_eq!(a[name!(x)], 1);
    assert_ne!(a, b);
    assert_eq!(a, named_tuple!(x = 1, y = 2));
    assert_eq!(std::mem::size_of_val(&a), 2 * std::mem::size_of::<i32>());
}
