use crate::commands::CmdResult;
use crate::processor::{
    PropertyDescriptor, Relationship, Timestamp2Date, CAPABILITY_DESCRIPTION, TAGS,
};
use serde::Serialize;

/// Documentation for the processor, for operators and host UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessorDescription {
    pub capability: &'static str,
    pub tags: &'static [&'static str],
    pub properties: &'static [PropertyDescriptor],
    pub relationships: Vec<RelationshipInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl From<&Relationship> for RelationshipInfo {
    fn from(rel: &Relationship) -> Self {
        Self {
            name: rel.name(),
            description: rel.description(),
        }
    }
}

pub fn run() -> CmdResult {
    let description = ProcessorDescription {
        capability: CAPABILITY_DESCRIPTION,
        tags: TAGS,
        properties: Timestamp2Date::properties(),
        relationships: Timestamp2Date::relationships()
            .iter()
            .map(RelationshipInfo::from)
            .collect(),
    };
    CmdResult::default().with_description(description)
}
