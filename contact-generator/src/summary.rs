use contact_tools::dto::ContactRecord;
use contact_tools::tally::Tally;
use contact_tools::util::format_thousands;
use std::fmt;

/// Per-category counts of a generated batch, largest first.
pub struct CategoryDistribution {
    pub rows: Vec<(String, usize)>,
    pub total: usize,
}

impl CategoryDistribution {
    pub fn from_contacts(contacts: &[ContactRecord]) -> Self {
        let tally: Tally = contacts.iter().map(|c| c.category.as_str()).collect();
        CategoryDistribution {
            rows: tally
                .most_common()
                .into_iter()
                .map(|(category, count)| (category.to_string(), count))
                .collect(),
            total: contacts.len(),
        }
    }
}

impl fmt::Display for CategoryDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Category distribution:")?;
        for (category, count) in &self.rows {
            let pct = *count as f64 / self.total as f64 * 100.0;
            writeln!(f, "  {}: {} ({:.1}%)", category, format_thousands(*count), pct)?;
        }
        Ok(())
    }
}
