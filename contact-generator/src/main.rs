mod generate;
mod summary;
mod util;

use contact_tools::dto::GeneratorConfig;
use contact_tools::error::ToolError;
use contact_tools::exit::make_exit_code;
use contact_tools::util::{format_thousands, init_tracing};
use generate::{ContactSource, RandomContactSource};
use std::process::ExitCode;
use std::time::Instant;
use summary::CategoryDistribution;
use tracing::info;

fn main() -> ExitCode {
    init_tracing();
    let config = GeneratorConfig::default();
    let mut source = RandomContactSource::from_entropy();
    make_exit_code(run(&config, &mut source))
}

fn run<S: ContactSource>(config: &GeneratorConfig, source: &mut S) -> Result<(), ToolError> {
    let num_contacts = format_thousands(config.num_contacts);
    println!("Generating {} dummy contacts...", num_contacts);
    let start = Instant::now();
    let contacts = generate::generate_contacts(source, config, |generated| {
        println!("Generated {} contacts...", format_thousands(generated))
    })?;
    info!(
        records = contacts.len(),
        "Generated in {:.4} secs",
        start.elapsed().as_secs_f64()
    );

    let output = config.output_file.display();
    println!("\nWriting to {}...", output);
    let start = Instant::now();
    util::push_contacts_file(&config.output_file, &contacts)?;
    info!(
        path = %config.output_file.display(),
        "File written in {:.4} secs",
        start.elapsed().as_secs_f64()
    );

    println!("✅ Successfully generated {} contacts!", num_contacts);
    println!("📄 File saved as: {}", output);
    println!();
    print!("{}", CategoryDistribution::from_contacts(&contacts));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::tests::{config, ScriptedSource};
    use contact_tools::exit::Status;
    use std::fs;

    #[test]
    fn writes_header_plus_one_line_per_contact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dummy_contacts.csv");
        let mut source = ScriptedSource::new(vec!["VIP", "VIP", "Newsletter"]);
        run(&config(3, path.clone()), &mut source).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "first_name,last_name,phone,email,category");
        assert!(lines[1].ends_with(",VIP"));
        assert!(lines[3].ends_with(",Newsletter"));
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dummy_contacts.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\nstale\nstale\n").unwrap();
        let mut source = ScriptedSource::new(vec!["Customers"]);
        run(&config(2, path.clone()), &mut source).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }

    #[test]
    fn empty_category_set_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dummy_contacts.csv");
        let config = GeneratorConfig {
            categories: &[],
            ..config(5, path.clone())
        };
        let err = run(&config, &mut ScriptedSource::new(vec!["VIP"])).unwrap_err();
        assert_eq!(err.status, Status::InvalidConfig);
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dummy_contacts.csv");
        let err = run(&config(1, path), &mut ScriptedSource::new(vec!["VIP"])).unwrap_err();
        assert_eq!(err.status, Status::OutputUnavailable);
    }
}
