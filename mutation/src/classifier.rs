//! Action classifier - which parts of a mutation's arguments are written data.
//!
//! | action            | fragments                                          |
//! |-------------------|----------------------------------------------------|
//! | `upsert`          | `create`, then `update`                            |
//! | `create`          | nested: the arguments; root: `data`                |
//! | `update`          | nested to-one: the arguments; otherwise `data`     |
//! | `updateMany`      | `data`, once                                       |
//! | `createMany`      | each element of `data`, in array order             |
//! | `connectOrCreate` | `create`                                           |
//! | anything else     | none                                               |
//!
//! Missing or `null` fields yield no fragment. Classification never fails
//! and never stops early; the dispatcher decides what to do with the list.

use mutguard_core::{ActionKind, FragmentSource, MutationDescription, Payload};

/// One payload about to be written for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment<'a> {
    /// Where in the arguments the payload was found.
    pub source: FragmentSource,
    /// The payload itself.
    pub payload: &'a Payload,
}

impl<'a> Fragment<'a> {
    fn new(source: FragmentSource, payload: &'a Payload) -> Self {
        Self { source, payload }
    }
}

/// Extract the ordered fragments of written data for a mutation.
pub fn classify<'a>(mutation: &MutationDescription<'a>) -> Vec<Fragment<'a>> {
    let args = mutation.arguments;

    match mutation.action {
        ActionKind::Upsert => field(args, "create", FragmentSource::Create)
            .into_iter()
            .chain(field(args, "update", FragmentSource::Update))
            .collect(),
        ActionKind::Create if mutation.is_nested() => whole(args),
        ActionKind::Create => field(args, "data", FragmentSource::Data).into_iter().collect(),
        ActionKind::Update if mutation.is_nested_to_one() => whole(args),
        ActionKind::Update | ActionKind::UpdateMany => {
            field(args, "data", FragmentSource::Data).into_iter().collect()
        }
        ActionKind::CreateMany => data_elements(args),
        ActionKind::ConnectOrCreate => {
            field(args, "create", FragmentSource::Create).into_iter().collect()
        }
        ActionKind::Other => Vec::new(),
    }
}

/// The arguments themselves, unless absent.
fn whole(args: &Payload) -> Vec<Fragment<'_>> {
    present(args)
        .map(|payload| Fragment::new(FragmentSource::Arguments, payload))
        .into_iter()
        .collect()
}

fn field<'a>(args: &'a Payload, name: &str, source: FragmentSource) -> Option<Fragment<'a>> {
    args.get(name)
        .and_then(present)
        .map(|payload| Fragment::new(source, payload))
}

/// `data` of a batched create. A lone object counts as a batch of one.
fn data_elements(args: &Payload) -> Vec<Fragment<'_>> {
    match args.get("data").and_then(present) {
        Some(Payload::Array(rows)) => rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                present(row).map(|row| Fragment::new(FragmentSource::DataElement(i), row))
            })
            .collect(),
        Some(single) => vec![Fragment::new(FragmentSource::Data, single)],
        None => Vec::new(),
    }
}

fn present(value: &Payload) -> Option<&Payload> {
    (!value.is_null()).then_some(value)
}
