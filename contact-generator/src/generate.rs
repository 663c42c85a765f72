use contact_tools::dto::{ContactRecord, GeneratorConfig};
use contact_tools::error::ToolError;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::prelude::*;

/// Supplies the randomized fields of a contact.
pub trait ContactSource {
    fn first_name(&mut self) -> String;
    fn last_name(&mut self) -> String;
    fn phone(&mut self) -> String;
    fn email(&mut self) -> String;
    /// Picks one label out of `categories`, `None` if the set is empty.
    fn category<'c>(&mut self, categories: &[&'c str]) -> Option<&'c str>;
}

/// Fake-data backed source. Names and emails come from the `fake` English
/// locale, phones and categories are uniform draws from the same rng.
pub struct RandomContactSource<R: Rng> {
    rng: R,
}

impl RandomContactSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomContactSource<R> {
    pub fn new(rng: R) -> Self {
        RandomContactSource { rng }
    }
}

impl<R: Rng> ContactSource for RandomContactSource<R> {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn phone(&mut self) -> String {
        generate_phone(&mut self.rng)
    }

    fn email(&mut self) -> String {
        FreeEmail().fake_with_rng(&mut self.rng)
    }

    fn category<'c>(&mut self, categories: &[&'c str]) -> Option<&'c str> {
        categories.choose(&mut self.rng).copied()
    }
}

/// US-style `+1NXXNXXXXXX` number. Area code and exchange are drawn from
/// [200, 999], the line number from [1000, 9999]. Uniqueness is not enforced.
pub fn generate_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area_code: u16 = rng.gen_range(200..=999);
    let exchange: u16 = rng.gen_range(200..=999);
    let number: u16 = rng.gen_range(1000..=9999);
    format!("+1{area_code}{exchange}{number}")
}

pub fn generate_contact<S: ContactSource + ?Sized>(
    source: &mut S,
    categories: &[&str],
) -> Result<ContactRecord, ToolError> {
    let first_name = source.first_name();
    let last_name = source.last_name();
    let phone = source.phone();
    let email = source.email();
    let category = source
        .category(categories)
        .ok_or_else(|| ToolError::invalid_config("category set must not be empty"))?;
    Ok(ContactRecord {
        first_name,
        last_name,
        phone,
        email,
        category: category.to_string(),
    })
}

///
/// Generates `config.num_contacts` records. `on_progress` is called with the
/// running total after every `config.progress_interval` records and has no
/// influence on the generated data.
///
pub fn generate_contacts<S, F>(
    source: &mut S,
    config: &GeneratorConfig,
    mut on_progress: F,
) -> Result<Vec<ContactRecord>, ToolError>
where
    S: ContactSource + ?Sized,
    F: FnMut(usize),
{
    if config.categories.is_empty() {
        return Err(ToolError::invalid_config("category set must not be empty"));
    }
    let mut contacts = Vec::with_capacity(config.num_contacts);
    for i in 0..config.num_contacts {
        contacts.push(generate_contact(source, config.categories)?);
        let generated = i + 1;
        if config.progress_interval > 0 && generated % config.progress_interval == 0 {
            on_progress(generated);
        }
    }
    Ok(contacts)
}
