use contact_tools::tally::Tally;
use std::fmt;

///
/// Duplicate summary over a list of phone numbers. Two numbers are the same
/// only when their trimmed text is identical.
///
pub struct DuplicateReport {
    /// Values seen more than once, by count descending then first encounter
    pub duplicates: Vec<(String, usize)>,
    /// Occurrences beyond the first, summed over all duplicated values
    pub excess: usize,
    pub total: usize,
    pub unique: usize,
}

impl DuplicateReport {
    pub fn new(numbers: &[String]) -> Self {
        let tally: Tally = numbers.iter().map(String::as_str).collect();
        let duplicates: Vec<(String, usize)> = tally
            .most_common()
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(number, count)| (number.to_string(), count))
            .collect();
        let excess = duplicates.iter().map(|(_, count)| count - 1).sum();
        DuplicateReport {
            duplicates,
            excess,
            total: tally.total(),
            unique: tally.distinct(),
        }
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.duplicates.is_empty() {
            writeln!(f, "No duplicates found!")?;
        } else {
            writeln!(f, "Found {} duplicate number(s):", self.duplicates.len())?;
            writeln!(f)?;
            for (number, count) in &self.duplicates {
                writeln!(f, "{}: {} times", number, count)?;
            }
            writeln!(f)?;
            writeln!(f, "Total duplicate entries: {}", self.excess)?;
        }
        writeln!(f)?;
        writeln!(f, "Total numbers in file: {}", self.total)?;
        writeln!(f, "Unique numbers: {}", self.unique)
    }
}
