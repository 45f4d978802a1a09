use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const NORMAL_WEAR_DEFINITION: &str = "92.001";
pub const REFUND_DEADLINE: &str = "92.103";
pub const ITEMIZED_ACCOUNTING: &str = "92.104";
pub const FORWARDING_ADDRESS: &str = "92.107";
pub const BAD_FAITH_LIABILITY: &str = "92.109";

const CHAPTER_92_URL: &str = "https://statutes.capitol.texas.gov/Docs/PR/htm/PR.92.htm";

/// Citation metadata rendered alongside findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteReference {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// Read-only citation lookup keyed by short section numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatuteTable {
    entries: BTreeMap<String, StatuteReference>,
}

impl StatuteTable {
    /// Texas Property Code, Chapter 92, Subchapter C (security deposits).
    pub fn texas_property_code() -> Self {
        let sections = [
            (
                NORMAL_WEAR_DEFINITION,
                "Definitions: normal wear and tear",
                "Deterioration from intended use, including breakage or malfunction due to age \
                 or deteriorated condition, is normal wear and tear and may not be charged to \
                 the tenant.",
            ),
            (
                REFUND_DEADLINE,
                "Obligation to refund",
                "The landlord must refund the security deposit on or before the 30th day after \
                 the tenant surrenders the premises.",
            ),
            (
                ITEMIZED_ACCOUNTING,
                "Retention of security deposit; accounting",
                "Deductions require a written description and itemized list of all deductions \
                 delivered with the balance; normal wear and tear may not be deducted.",
            ),
            (
                FORWARDING_ADDRESS,
                "Tenant's forwarding address",
                "The landlord is not obligated to return the deposit or describe deductions \
                 until the tenant gives a written statement of a forwarding address.",
            ),
            (
                BAD_FAITH_LIABILITY,
                "Liability of landlord",
                "A landlord who fails to return the deposit or an itemized accounting within 30 \
                 days is presumed to act in bad faith and is liable for $100, three times the \
                 amount wrongfully withheld, and reasonable attorney's fees.",
            ),
        ];

        let entries = sections
            .into_iter()
            .map(|(id, title, summary)| {
                let reference = StatuteReference {
                    id: id.to_string(),
                    title: title.to_string(),
                    summary: summary.to_string(),
                    url: format!("{CHAPTER_92_URL}#{id}"),
                };
                (id.to_string(), reference)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&StatuteReference> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Resolve citations in first-seen order, dropping duplicates and unknown ids.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<StatuteReference>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = Vec::new();
        let mut resolved = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            if let Some(reference) = self.get(id) {
                resolved.push(reference.clone());
            }
        }
        resolved
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatuteReference> {
        self.entries.values()
    }
}

impl Default for StatuteTable {
    fn default() -> Self {
        Self::texas_property_code()
    }
}
