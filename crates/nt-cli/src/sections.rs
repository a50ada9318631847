//! The demo sections and the emitter they render through.

use std::fmt::Display;
use std::io::Write;

use clap::ValueEnum;
use console::style;
use itertools::Itertools;
use nt_core::extends::extends;
use nt_core::record::FieldVisitor;
use nt_core::{name, named_tuple, Any, Extends, Has, Name, NamedTuple, Record, ToJson};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::{OutputConfig, OutputFormat};
use crate::{CliError, Result};

/// Fails the section when the condition does not hold.
macro_rules! ensure {
    ($section:expr, $cond:expr) => {
        if !$cond {
            return Err(CliError::Check {
                section: $section.name(),
                message: stringify!($cond).to_string(),
            });
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Empty,
    Direct,
    Extends,
    Assignment,
    Modification,
    Composition,
    Nesting,
    Get,
    Decomposition,
    Packing,
    Array,
    Apply,
    Showcase,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::Empty,
        Section::Direct,
        Section::Extends,
        Section::Assignment,
        Section::Modification,
        Section::Composition,
        Section::Nesting,
        Section::Get,
        Section::Decomposition,
        Section::Packing,
        Section::Array,
        Section::Apply,
        Section::Showcase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Empty => "empty",
            Section::Direct => "direct",
            Section::Extends => "extends",
            Section::Assignment => "assignment",
            Section::Modification => "modification",
            Section::Composition => "composition",
            Section::Nesting => "nesting",
            Section::Get => "get",
            Section::Decomposition => "decomposition",
            Section::Packing => "packing",
            Section::Array => "array",
            Section::Apply => "apply",
            Section::Showcase => "showcase",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Section::Empty => "a record without fields",
            Section::Direct => "fields initialised in place",
            Section::Extends => "shape constraints on generic code",
            Section::Assignment => "bulk assignment by position and by name",
            Section::Modification => "writing fields through the index operator",
            Section::Composition => "splicing records and placeholders together",
            Section::Nesting => "records as field values",
            Section::Get => "positional access",
            Section::Decomposition => "binding every field to a local",
            Section::Packing => "storage size and alignment",
            Section::Array => "lists stored in placeholder fields",
            Section::Apply => "calling a function with selected fields",
            Section::Showcase => "a list of employees rendered as JSON",
        }
    }

    pub fn run<W: Write>(self, out: &mut Emitter<W>) -> Result<()> {
        out.heading(self)?;
        match self {
            Section::Empty => empty(out),
            Section::Direct => direct(out),
            Section::Extends => extension(out),
            Section::Assignment => assignment(out),
            Section::Modification => modification(out),
            Section::Composition => composition(out),
            Section::Nesting => nesting(out),
            Section::Get => get(out),
            Section::Decomposition => decomposition(out),
            Section::Packing => packing(out),
            Section::Array => array(out),
            Section::Apply => apply(out),
            Section::Showcase => showcase(out),
        }
    }
}

/// Runs `sections` in order and hands the writer back.
pub fn run_all<W: Write>(
    sections: impl IntoIterator<Item = Section>,
    output: &OutputConfig,
    writer: W,
) -> Result<W> {
    let mut out = Emitter::new(writer, output);
    for section in sections {
        tracing::debug!("Running section '{}'", section.name());
        section.run(&mut out)?;
    }
    Ok(out.into_inner())
}

/// Writes section output in the configured format. Text mode prints records
/// through `Display`; JSON mode prints one document per record or fact.
pub struct Emitter<W> {
    out: W,
    format: OutputFormat,
    pretty: bool,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, output: &OutputConfig) -> Self {
        Self {
            out,
            format: output.format,
            pretty: output.pretty,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn heading(&mut self, section: Section) -> Result<()> {
        if self.format == OutputFormat::Text {
            let title = format!("# {}: {}", section.name(), section.about());
            writeln!(self.out, "{}", style(title).cyan().bold())?;
        }
        Ok(())
    }

    pub fn record<R: Display + ToJson>(&mut self, record: &R) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{record}")?,
            OutputFormat::Json => {
                let value = record.to_json()?;
                self.json(&value)?;
            }
        }
        Ok(())
    }

    /// A named scalar such as a size or a computed string.
    pub fn fact<T: Display + Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{key}: {value}")?,
            OutputFormat::Json => {
                let mut map = Map::new();
                map.insert(key.to_string(), serde_json::to_value(value)?);
                self.json(&Value::Object(map))?;
            }
        }
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn json(&mut self, value: &Value) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        self.line(&text)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn empty<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let empty = named_tuple!();
    ensure!(Section::Empty, empty.size() == 0);
    ensure!(Section::Empty, !extends::<NamedTuple!(), (Name!(""),)>());
    out.record(&empty)
}

fn direct<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let trade = named_tuple!(Trade { price = 42, size = 100 });
    ensure!(Section::Direct, trade[name!(price)] == 42);
    ensure!(Section::Direct, trade[name!(size)] == 100);
    out.record(&trade)
}

type Quote = NamedTuple!(price: i32, size: u64);

const _: () = assert!(!extends::<Quote, (Name!(quantity),)>());
const _: () = assert!(!extends::<Quote, (Name!(price), Name!(quantity))>());
const _: () = assert!(!extends::<Quote, (Name!(price), Name!(size), Name!(value))>());
const _: () = assert!(extends::<Quote, (Name!(price), Name!(size))>());
const _: () = assert!(extends::<Quote, (Name!(size), Name!(price))>());

fn name_of<R>(record: &R) -> i32
where
    R: Extends<(Name!(name),)> + Has<Name!(name), Value = i32>,
{
    *record.get_value()
}

fn extension<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let quote = Quote::from_values((42, 100u64));
    ensure!(Section::Extends, quote[name!(size)] == 100);
    out.fact("extends(size, price)", extends::<Quote, (Name!(size), Name!(price))>())?;
    out.fact("extends(price, quantity)", extends::<Quote, (Name!(price), Name!(quantity))>())?;

    let empty = named_tuple!();
    let named = named_tuple!(empty, name = 42);
    ensure!(Section::Extends, name_of(&named) == 42);
    out.fact("name_of", name_of(&named))
}

fn assignment<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let mut trade = named_tuple!(price: i32, size: u64);
    ensure!(Section::Assignment, trade[name!(price)] == 0 && trade[name!(size)] == 0);

    trade.assign((42, 99u64));
    ensure!(Section::Assignment, trade[name!(price)] == 42 && trade[name!(size)] == 99);
    out.record(&trade)?;

    trade.assign((name!(price).set(11), name!(size).set(1234u64)));
    ensure!(Section::Assignment, trade[name!(price)] == 11 && trade[name!(size)] == 1234);
    out.record(&trade)
}

fn modification<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let mut trade = named_tuple!(price: i32, size: u64);
    trade[name!(price)] = 12;
    trade[name!(size)] = 34;
    ensure!(Section::Modification, trade[name!(price)] == 12 && trade[name!(size)] == 34);
    out.record(&trade)
}

fn composition<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let quantity = named_tuple!(quantity = 42);
    let value = named_tuple!(value = 100u32);
    let mut msg = named_tuple!(Msg { &quantity, "price", "size", value });

    msg[name!(price)] = 12.into();
    msg[name!(size)] = 34u32.into();

    ensure!(Section::Composition, msg[name!(price)].get::<i32>().ok() == Some(&12));
    ensure!(Section::Composition, msg[name!(size)].get::<u32>().ok() == Some(&34));
    ensure!(Section::Composition, msg[name!(quantity)] == 42);
    ensure!(Section::Composition, quantity[name!(quantity)] == 42);
    out.record(&msg)
}

fn nesting<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let person = named_tuple!("first", "last");
    let mut attendee = named_tuple!(Attendee { name = person, "position" });

    attendee[name!(name)][name!(first)] = "Lho".into();
    attendee[name!(name)][name!(last)] = "Hyung-Suk".into();
    attendee[name!(position)] = "CEO".into();
    out.record(&attendee)
}

fn get<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let trade = named_tuple!(price = 100, size = 42u32);
    ensure!(Section::Get, trade.get::<0>().value == 100 && trade.get::<1>().value == 42);

    let first = trade.get::<0>();
    out.fact(first.name(), first.value)?;
    let second = trade.get::<1>();
    out.fact(second.name(), second.value)
}

fn decomposition<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let mut trade = named_tuple!(price = 100, size = 42u32);
    {
        let (price, size) = trade.as_fields_mut();
        ensure!(Section::Decomposition, price.value == 100 && size.value == 42);
        price.value = 50;
        size.value = 40;
    }
    ensure!(Section::Decomposition, trade[name!(price)] == 50 && trade[name!(size)] == 40);
    out.record(&trade)
}

fn packing<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let packed = named_tuple!(_1: u8, _2: i32, _3: u8);
    let size = std::mem::size_of_val(&packed);
    let align = std::mem::align_of_val(&packed);
    ensure!(Section::Packing, size == 12 && align == 4);
    out.fact("size_of", size)?;
    out.fact("align_of", align)
}

fn array<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let mut person = named_tuple!(Person { name: String, "children" });

    person.assign((
        name!(name).set(String::from("Hyung-Suk")),
        name!(children).set(Any::list(["Yoon-Jung", "BM"])),
    ));
    out.record(&person)?;

    person.assign(("Mike", ["John"]));
    ensure!(Section::Array, person[name!(name)] == "Mike");
    out.record(&person)
}

fn apply<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let item = named_tuple!(price = 42, size = 100, name = String::from("Item"));

    let label = item.apply((name!(name), name!(price)), |(name, price)| {
        format!("{name}@{price}")
    });
    ensure!(Section::Apply, label == "Item@42");
    out.fact("apply", label)?;

    let all = item.apply_all(|(price, size, name)| {
        let entries = [
            format!("{:?}: {}", price.name(), price.value),
            format!("{:?}: {}", size.name(), size.value),
            format!("{:?}: {}", name.name(), name.value),
        ];
        format!("{{{}}}", entries.iter().join(", "))
    });
    out.fact("apply_all", all)
}

type Employee = NamedTuple!(Employee { name, age, title });

/// Collects `"name" : value` lines for the text rendering of the showcase.
struct Lines(Vec<String>);

impl<V: Display> FieldVisitor<V> for Lines {
    fn visit(&mut self, name: &'static str, value: &V) {
        self.0.push(format!("\t\t{name:?} : {value}"));
    }
}

fn showcase<W: Write>(out: &mut Emitter<W>) -> Result<()> {
    let mut employees = vec![
        Employee::from_values((String::from("Hyung-Suk"), 20, String::from("Dad"))),
        Employee::from_values((String::from("Yoon-Jung"), 3, String::from("Baby"))),
    ];

    let age = 30;
    employees[0].assign((name!(age).set(age),));
    ensure!(Section::Showcase, employees[0][name!(age)].get::<i32>().ok() == Some(&30));

    match out.format() {
        OutputFormat::Text => {
            out.line("[{")?;
            for employee in &employees {
                let mut lines = Lines(Vec::new());
                employee.for_each_field(&mut lines);
                out.line(&format!("\t{:?}: {{", employee.tag()))?;
                out.line(&lines.0.join(",\n"))?;
                out.line("\t}")?;
            }
            out.line("}]")
        }
        OutputFormat::Json => {
            let rendered = employees
                .iter()
                .map(|employee| -> Result<Value> {
                    let mut map = Map::new();
                    map.insert(employee.tag().to_string(), employee.to_json()?);
                    Ok(Value::Object(map))
                })
                .collect::<Result<Vec<_>>>()?;
            out.json(&Value::Array(rendered))
        }
    }
}
