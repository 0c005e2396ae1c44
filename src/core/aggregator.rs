use crate::domain::model::{Model, Organization, Record, User};
use crate::utils::error::{EtlError, Result};
use indexmap::{IndexMap, IndexSet};

pub const FIELDS_PER_RECORD: usize = 3;

/// Groups (organization, user, role) rows into a `Model`.
///
/// Organizations, users and roles keep the position at which they were first
/// seen; repeated roles for the same user are dropped. Names are compared
/// exactly (case-sensitive) after trimming surrounding whitespace. Empty
/// fields are accepted as values.
#[derive(Debug, Default)]
pub struct Aggregator {
    organizations: IndexMap<String, IndexMap<String, IndexSet<String>>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &Record) -> Result<()> {
        let (organization, username, role) = match record.fields.as_slice() {
            [organization, username, role] => (organization.trim(), username.trim(), role.trim()),
            fields => {
                return Err(EtlError::FieldCountError {
                    line: record.line,
                    found: fields.len(),
                })
            }
        };

        let users = self
            .organizations
            .entry(organization.to_string())
            .or_default();
        let roles = users.entry(username.to_string()).or_default();

        if !roles.insert(role.to_string()) {
            tracing::trace!(organization, username, role, "duplicate role ignored");
        }

        Ok(())
    }

    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }

    pub fn finish(self) -> Model {
        let organizations = self
            .organizations
            .into_iter()
            .map(|(name, users)| Organization {
                name,
                users: users
                    .into_iter()
                    .map(|(username, roles)| User {
                        username,
                        roles: roles.into_iter().collect(),
                    })
                    .collect(),
            })
            .collect();

        Model::from_organizations(organizations)
    }
}

/// All-or-nothing: the first bad record aborts and no partial model escapes.
pub fn aggregate<I>(records: I) -> Result<Model>
where
    I: IntoIterator<Item = Record>,
{
    let mut aggregator = Aggregator::new();
    for record in records {
        aggregator.push(&record)?;
    }

    tracing::debug!(
        organizations = aggregator.organization_count(),
        "aggregation finished"
    );
    Ok(aggregator.finish())
}
