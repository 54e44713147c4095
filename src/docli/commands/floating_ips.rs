use super::truncate;
use crate::client::CloudApi;
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let ips = truncate(client.list_floating_ips()?, limit);
    display::floating_ip::many(&ips, out)
}

pub fn get<C: CloudApi>(client: &C, ip: &str, out: &Output) -> Result<Document> {
    let ip = client.get_floating_ip(ip)?;
    display::floating_ip::one(&ip, out)
}

pub fn delete<C: CloudApi>(client: &C, ip: &str, out: &Output) -> Result<Document> {
    client.delete_floating_ip(ip)?;
    Ok(display::message::show(
        &format!("Floating IP {} deleted.", ip),
        out,
    ))
}

pub fn actions<C: CloudApi>(
    client: &C,
    ip: &str,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let actions = truncate(client.floating_ip_actions(ip)?, limit);
    display::action::many(&actions, out)
}
