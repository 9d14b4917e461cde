use chrono::NaiveDate;
use qdesk_core::{
    country::CountryIndex,
    declaration::{Declaration, DeclarationDraft},
    roster::{Roster, RosterQuery},
};
use qdesk_remote::{country::CountryClient, records::TravelerRecordClient, ClientConfig};

use super::{render, runtime::block_on, QdeskCliError};

pub fn run_list(config: &ClientConfig, query: RosterQuery, page: usize) -> Result<(), QdeskCliError> {
    let client = TravelerRecordClient::new(&config.records)?;
    let records = block_on(client.list())??;
    let mut roster = Roster::new(records);
    roster.search(query);
    let reached = roster.go_to_page(page);
    if reached != page && roster.total_pages() > 0 {
        log::warn!(
            "requested page {page} but the roster has {} pages",
            roster.total_pages()
        );
    }
    let countries = fetch_countries(config);
    println!("{}", render::roster_table(&roster, countries.as_ref()));
    println!("{}", render::roster_footer(&roster));
    Ok(())
}

/// prints an empty draft to fill in for `submit`, followed by the checkbox
/// values of the intake form.
pub fn run_template() -> Result<(), QdeskCliError> {
    println!("{}", render::draft_template(&DeclarationDraft::new())?);
    println!("{}", render::vocabulary_listing());
    Ok(())
}

pub fn run_show(config: &ClientConfig, id: &str) -> Result<(), QdeskCliError> {
    let client = TravelerRecordClient::new(&config.records)?;
    let record = block_on(client.get(id))??;
    let countries = fetch_countries(config);
    println!("{}", render::declaration_detail(&record, countries.as_ref()));
    Ok(())
}

pub fn run_delete(config: &ClientConfig, id: &str) -> Result<(), QdeskCliError> {
    let client = TravelerRecordClient::new(&config.records)?;
    block_on(client.delete(id))??;
    println!("deleted traveler record {id}");
    Ok(())
}

pub fn run_submit(config: &ClientConfig, file: &str) -> Result<(), QdeskCliError> {
    let draft = read_draft(file)?;
    let countries = fetch_countries(config);
    let submission = prepare_submission(draft, countries.as_ref(), today())?;
    let client = TravelerRecordClient::new(&config.records)?;
    let created = block_on(client.create(&submission))??;
    println!(
        "submitted traveler record {}",
        created.id.as_deref().unwrap_or("(no id returned)")
    );
    Ok(())
}

/// replaces a record. the creation date of the stored record is kept unless
/// the draft sets one.
pub fn run_update(config: &ClientConfig, id: &str, file: &str) -> Result<(), QdeskCliError> {
    let mut draft = read_draft(file)?;
    let client = TravelerRecordClient::new(&config.records)?;
    let existing = block_on(client.get(id))??;
    if draft.declaration.created_at.is_none() {
        draft.declaration.created_at = existing.created_at;
    }
    let countries = fetch_countries(config);
    let submission = prepare_submission(draft, countries.as_ref(), today())?;
    block_on(client.update(id, &submission))??;
    println!("updated traveler record {id}");
    Ok(())
}

/// the country list is reference data only. when it cannot be loaded, codes
/// are shown as-is and declarations are checked for code format alone.
fn fetch_countries(config: &ClientConfig) -> Option<CountryIndex> {
    let result = CountryClient::new(&config.countries)
        .map_err(QdeskCliError::from)
        .and_then(|client| block_on(client.list())?.map_err(QdeskCliError::from));
    match result {
        Ok(index) => Some(index),
        Err(e) => {
            log::warn!("country list unavailable, showing country codes: {e}");
            None
        }
    }
}

fn read_draft(path: &str) -> Result<DeclarationDraft, QdeskCliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| QdeskCliError::DraftFileError {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    decode_draft(path, &contents)
}

fn decode_draft(path: &str, contents: &str) -> Result<DeclarationDraft, QdeskCliError> {
    serde_json::from_str(contents).map_err(|e| QdeskCliError::DraftFileError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn prepare_submission(
    draft: DeclarationDraft,
    countries: Option<&CountryIndex>,
    today: NaiveDate,
) -> Result<Declaration, QdeskCliError> {
    if let Some(index) = countries {
        draft.validate_countries(index)?;
    }
    let submission = draft.into_submission(today)?;
    Ok(submission)
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
