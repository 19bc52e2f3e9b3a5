use indexmap::IndexMap;

use crate::model::TaskRecord;

/// Level of a group in the contract hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLevel {
    Contract,
    Category,
    Subdomain,
}

impl GroupLevel {
    pub fn label(self) -> &'static str {
        match self {
            GroupLevel::Contract => "Contract",
            GroupLevel::Category => "Category",
            GroupLevel::Subdomain => "Subdomain",
        }
    }
}

/// Children of a group: nested groups, or the tasks themselves at the leaf
#[derive(Debug, Clone, PartialEq)]
pub enum GroupContent<'a> {
    Groups(Vec<GroupNode<'a>>),
    Tasks(Vec<&'a TaskRecord>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode<'a> {
    pub level: GroupLevel,
    pub key: String,
    pub content: GroupContent<'a>,
}

impl<'a> GroupNode<'a> {
    /// Number of tasks at the leaves below this node
    pub fn task_count(&self) -> usize {
        match &self.content {
            GroupContent::Groups(groups) => groups.iter().map(GroupNode::task_count).sum(),
            GroupContent::Tasks(tasks) => tasks.len(),
        }
    }

    /// Sum of open tasks below this node
    pub fn open_tasks(&self) -> u64 {
        self.tasks().iter().map(|t| u64::from(t.open_tasks)).sum()
    }

    /// All tasks below this node, in display order
    pub fn tasks(&self) -> Vec<&'a TaskRecord> {
        let mut out = Vec::new();
        self.collect_tasks(&mut out);
        out
    }

    fn collect_tasks(&self, out: &mut Vec<&'a TaskRecord>) {
        match &self.content {
            GroupContent::Groups(groups) => {
                for g in groups {
                    g.collect_tasks(out);
                }
            }
            GroupContent::Tasks(tasks) => out.extend(tasks.iter().copied()),
        }
    }
}

type SubdomainMap<'a> = IndexMap<&'a str, Vec<&'a TaskRecord>>;
type CategoryMap<'a> = IndexMap<&'a str, SubdomainMap<'a>>;

/// Two-level grouping: contract → tasks. Contracts keep first-seen order.
pub fn group_by_contract<'a>(records: &[&'a TaskRecord]) -> Vec<GroupNode<'a>> {
    let mut contracts: IndexMap<&'a str, Vec<&'a TaskRecord>> = IndexMap::new();
    for &record in records {
        contracts
            .entry(record.contract_id.as_str())
            .or_default()
            .push(record);
    }
    contracts
        .into_iter()
        .map(|(key, tasks)| leaf(GroupLevel::Contract, key, tasks))
        .collect()
}

/// Three-level grouping: contract → category → subdomain → tasks, in one
/// pass. Keys at every level keep first-seen order.
pub fn group_by_hierarchy<'a>(records: &[&'a TaskRecord]) -> Vec<GroupNode<'a>> {
    let mut contracts: IndexMap<&'a str, CategoryMap<'a>> = IndexMap::new();
    for &record in records {
        contracts
            .entry(record.contract_id.as_str())
            .or_default()
            .entry(record.category.as_str())
            .or_default()
            .entry(record.subdomain.as_str())
            .or_default()
            .push(record);
    }

    contracts
        .into_iter()
        .map(|(contract, categories)| GroupNode {
            level: GroupLevel::Contract,
            key: contract.to_string(),
            content: GroupContent::Groups(
                categories
                    .into_iter()
                    .map(|(category, subdomains)| GroupNode {
                        level: GroupLevel::Category,
                        key: category.to_string(),
                        content: GroupContent::Groups(
                            subdomains
                                .into_iter()
                                .map(|(sub, tasks)| leaf(GroupLevel::Subdomain, sub, tasks))
                                .collect(),
                        ),
                    })
                    .collect(),
            ),
        })
        .collect()
}

fn leaf<'a>(level: GroupLevel, key: &str, tasks: Vec<&'a TaskRecord>) -> GroupNode<'a> {
    GroupNode {
        level,
        key: key.to_string(),
        content: GroupContent::Tasks(tasks),
    }
}
