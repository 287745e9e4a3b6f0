mod test_selection;

#[cfg(feature = "document")]
mod test_document;
