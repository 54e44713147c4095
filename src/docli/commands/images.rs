use super::truncate;
use crate::client::{CloudApi, ImageQuery};
use crate::display;
use crate::error::Result;
use crate::output::{Document, Output};

pub fn list<C: CloudApi>(
    client: &C,
    query: ImageQuery,
    limit: Option<usize>,
    out: &Output,
) -> Result<Document> {
    let images = truncate(client.list_images(query)?, limit);
    display::image::many(&images, out)
}

pub fn get<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    let image = client.get_image(id)?;
    display::image::one(&image, out)
}

pub fn delete<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    client.delete_image(id)?;
    Ok(display::message::show(&format!("Image {} deleted.", id), out))
}
