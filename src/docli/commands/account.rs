use crate::client::CloudApi;
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn show<C: CloudApi>(client: &C, out: &Output) -> Result<Document> {
    let account = client.account()?;
    display::account::one(&account, out)
}
