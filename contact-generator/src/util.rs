use contact_tools::dto::{ContactRecord, CSV_HEADERS};
use contact_tools::error::ToolError;
use contact_tools::util::write_file;
use csv::{Terminator, WriterBuilder};
use std::path::Path;

/// Serializes `contacts` as CSV, header row first, into memory.
pub fn encode_contacts(contacts: &[ContactRecord]) -> Result<Vec<u8>, ToolError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(vec![]);
    writer
        .write_record(CSV_HEADERS)
        .map_err(ToolError::internal)?;
    for contact in contacts {
        writer.serialize(contact).map_err(ToolError::internal)?;
    }
    writer.into_inner().map_err(ToolError::internal)
}

pub fn push_contacts_file(path: &Path, contacts: &[ContactRecord]) -> Result<(), ToolError> {
    let object = encode_contacts(contacts)?;
    write_file(path, &object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_tools::exit::Status;
    use csv::Reader;
    use std::fs;

    fn contact(first_name: &str, category: &str) -> ContactRecord {
        ContactRecord {
            first_name: first_name.to_string(),
            last_name: "O'Neil, Jr.".to_string(),
            phone: "+12025550143".to_string(),
            email: format!("{}@example.org", first_name.to_lowercase()),
            category: category.to_string(),
        }
    }

    #[test]
    fn header_only_for_no_contacts() {
        let bytes = encode_contacts(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "first_name,last_name,phone,email,category\r\n"
        );
    }

    #[test]
    fn file_reads_back_with_header_and_one_row_per_contact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        let contacts = vec![contact("Ada", "VIP"), contact("Grace", "Hot Leads")];
        push_contacts_file(&path, &contacts).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), contacts.len() + 1);
        assert_eq!(text.matches("\r\n").count(), contacts.len() + 1);

        let mut reader = Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap(), CSV_HEADERS.to_vec());
        let read: Vec<ContactRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(read, contacts);
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = push_contacts_file(&dir.path().join("missing").join("contacts.csv"), &[])
            .unwrap_err();
        assert_eq!(err.status, Status::OutputUnavailable);
    }
}
