use super::truncate;
use crate::client::{CloudApi, VolumeRequest};
use crate::display;
use crate::error::{DocliError, Result};
use crate::output::{Document, Output};
use crate::prompt::Prompt;

/// Attempts allowed for each required field before giving up.
const MAX_ATTEMPTS: usize = 3;

/// Volume attributes given on the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeArgs {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub snapshot: Option<String>,
}

pub fn list<C: CloudApi>(client: &C, limit: Option<usize>, out: &Output) -> Result<Document> {
    let volumes = truncate(client.list_volumes()?, limit);
    display::volume::many(&volumes, out)
}

pub fn get<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    let volume = client.get_volume(id)?;
    display::volume::one(&volume, None, out)
}

pub fn add<C: CloudApi, P: Prompt>(
    client: &C,
    args: VolumeArgs,
    prompt: &mut P,
    out: &Output,
) -> Result<Document> {
    let request = collect(args, prompt)?;
    let volume = client.create_volume(&request)?;
    display::volume::one(&volume, Some("Volume created."), out)
}

pub fn delete<C: CloudApi>(client: &C, id: &str, out: &Output) -> Result<Document> {
    client.delete_volume(id)?;
    Ok(display::message::show(
        &format!("Volume {} deleted.", id),
        out,
    ))
}

/// Merges flags with prompted answers. Flags always win; a field given on the
/// command line is never asked for.
pub fn collect<P: Prompt>(args: VolumeArgs, prompt: &mut P) -> Result<VolumeRequest> {
    let name = match args.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => ask_required(prompt, "Volume name", |answer| {
            (!answer.is_empty()).then(|| answer.to_string())
        })?
        .ok_or_else(|| DocliError::Validation("A volume name is required".into()))?,
    };

    let size_gigabytes = match args.size {
        Some(size) => size,
        None => ask_required(prompt, "Size (GB)", |answer| {
            answer.parse::<u64>().ok().filter(|size| *size > 0)
        })?
        .ok_or_else(|| {
            DocliError::Validation("A volume size in whole gigabytes is required".into())
        })?,
    };

    let description = match args.description {
        Some(description) => Some(description),
        None => ask_optional(prompt, "Description (optional)")?,
    };

    // A volume starts either in a region or from a snapshot.
    let (region, snapshot_id) = match (args.region, args.snapshot) {
        (None, None) => {
            let region = ask_optional(
                prompt,
                "Region slug (cannot be specified with a snapshot)",
            )?;
            let snapshot = match region {
                Some(_) => None,
                None => ask_optional(
                    prompt,
                    "Base snapshot ID (cannot be specified with a region)",
                )?,
            };
            (region, snapshot)
        }
        given => given,
    };

    Ok(VolumeRequest {
        name,
        size_gigabytes,
        description,
        region,
        snapshot_id,
    })
}

fn ask_required<P, T, F>(prompt: &mut P, question: &str, parse: F) -> Result<Option<T>>
where
    P: Prompt,
    F: Fn(&str) -> Option<T>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let answer = prompt.ask(question)?;
        if let Some(value) = parse(&answer) {
            return Ok(Some(value));
        }
        log::debug!("invalid answer for {:?} (attempt {})", question, attempt);
    }
    Ok(None)
}

fn ask_optional<P: Prompt>(prompt: &mut P, question: &str) -> Result<Option<String>> {
    let answer = prompt.ask(question)?;
    Ok((!answer.is_empty()).then_some(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use crate::prompt::scripted::ScriptedPrompt;

    #[test]
    fn flags_are_not_prompted() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let args = VolumeArgs {
            name: Some("data".into()),
            size: Some(10),
            description: Some("scratch".into()),
            region: Some("nyc1".into()),
            snapshot: None,
        };
        let request = collect(args, &mut prompt).unwrap();
        assert!(prompt.asked.is_empty());
        assert_eq!(request.name, "data");
        assert_eq!(request.size_gigabytes, 10);
        assert_eq!(request.region.as_deref(), Some("nyc1"));
        assert_eq!(request.snapshot_id, None);
    }

    #[test]
    fn missing_fields_are_prompted() {
        let mut prompt = ScriptedPrompt::new(&["data", "20", "", "", "snap-1"]);
        let request = collect(VolumeArgs::default(), &mut prompt).unwrap();
        assert_eq!(prompt.asked.len(), 5);
        assert_eq!(request.name, "data");
        assert_eq!(request.size_gigabytes, 20);
        assert_eq!(request.description, None);
        assert_eq!(request.region, None);
        assert_eq!(request.snapshot_id.as_deref(), Some("snap-1"));
    }

    #[test]
    fn region_answer_skips_snapshot_question() {
        let mut prompt = ScriptedPrompt::new(&["", "sfo2"]);
        let args = VolumeArgs {
            name: Some("data".into()),
            size: Some(5),
            ..Default::default()
        };
        let request = collect(args, &mut prompt).unwrap();
        assert_eq!(
            prompt.asked,
            [
                "Description (optional)",
                "Region slug (cannot be specified with a snapshot)"
            ]
        );
        assert_eq!(request.region.as_deref(), Some("sfo2"));
    }

    #[test]
    fn bad_sizes_are_asked_again() {
        let mut prompt = ScriptedPrompt::new(&["abc", "0", "15", "", ""]);
        let args = VolumeArgs {
            name: Some("data".into()),
            ..Default::default()
        };
        let request = collect(args, &mut prompt).unwrap();
        assert_eq!(request.size_gigabytes, 15);
    }

    #[test]
    fn repeated_empty_names_fail() {
        let mut prompt = ScriptedPrompt::new(&["", " ", ""]);
        let err = collect(VolumeArgs::default(), &mut prompt).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(prompt.asked.len(), 3);
    }

    #[test]
    fn add_creates_and_confirms() {
        let out = table_out();
        let client = FixtureClient::new(Fixtures::default());
        let mut prompt = ScriptedPrompt::new(&[]);
        let args = VolumeArgs {
            name: Some("data".into()),
            size: Some(10),
            description: Some("scratch".into()),
            region: Some("nyc1".into()),
            snapshot: None,
        };
        let rendered = render(&out, &add(&client, args, &mut prompt, &out).unwrap());
        assert!(rendered.starts_with("Volume created.\n"));
        assert!(rendered.contains("ID: vol-1000"));
        assert_eq!(client.calls(), ["create_volume"]);
    }

    #[test]
    fn invalid_input_never_reaches_the_api() {
        let client = FixtureClient::new(Fixtures::default());
        let mut prompt = ScriptedPrompt::new(&[]);
        assert!(add(&client, VolumeArgs::default(), &mut prompt, &table_out()).is_err());
        assert!(client.calls().is_empty());
    }
}
