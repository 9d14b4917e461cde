//! traveler health and travel declarations, as stored by the record service
//! and as edited in the intake form.
mod date_codec;
mod declaration_draft;
mod declaration_error;
mod gender;
mod traveler_declaration;
pub mod vocabulary;

pub use date_codec::DECLARATION_DATE_FORMAT;
pub use declaration_draft::DeclarationDraft;
pub use declaration_error::DeclarationError;
pub use gender::Gender;
pub use traveler_declaration::Declaration;
