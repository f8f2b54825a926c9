mod fields;
mod form;
mod result_card;

pub use form::PredictionForm;
