//! Tests for the saved prompt library and its persistence.

use chrono::{TimeZone, Utc};
use prompt_studio_core::GenerationRequest;
use prompt_studio_library::{
    ModuleFilter, PromptDraft, PromptDraftBuilder, PromptLibrary, PromptUpdate,
};
use std::str::FromStr;
use tempfile::TempDir;

fn draft(module: &str, title: &str, content: &str, tags: &[&str]) -> PromptDraft {
    PromptDraftBuilder::default()
        .module(module)
        .title(title)
        .content(content)
        .tags(tags.iter().map(|t| t.to_string()).collect::<Vec<_>>())
        .build()
        .expect("draft has module and content")
}

fn sample_library() -> PromptLibrary {
    let mut library = PromptLibrary::default();
    library.save(draft("carousel", "Carousel — LinkedIn — Auto", "Slides about hiring", &["Launch"]));
    library.save(draft("designers", "Landscape — Moody — Midjourney", "A foggy coast", &[]));
    library.save(draft("carousel", "Carousel — TikTok — Auto", "Recipes in five slides", &["food"]));
    library
}

#[test]
fn test_save_inserts_newest_first() {
    let library = sample_library();
    let titles: Vec<&str> = library.prompts().iter().map(|p| p.title().as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Carousel — TikTok — Auto",
            "Landscape — Moody — Midjourney",
            "Carousel — LinkedIn — Auto",
        ]
    );
}

#[test]
fn test_missing_model_is_stored_as_auto() {
    let mut library = PromptLibrary::default();
    let saved = library.save(draft("writers", "", "text", &[]));
    assert_eq!(saved.model(), "Auto");

    let request = GenerationRequest::new("designers").with_model("Leonardo");
    let saved = library.save(PromptDraft::from_request(&request, "prompt"));
    assert_eq!(saved.model(), "Leonardo");
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let library = sample_library();
    assert_eq!(library.search("launch").len(), 1);
    assert_eq!(library.search("FOGGY").len(), 1);
    assert_eq!(library.search("carousel").len(), 2);
    assert!(library.search("nothing like this").is_empty());
}

#[test]
fn test_filter_combines_module_and_query() {
    let library = sample_library();
    assert_eq!(library.by_module("carousel").len(), 2);
    assert_eq!(library.filter(&ModuleFilter::All, "").len(), 3);

    let carousel = ModuleFilter::from_str("carousel").expect("infallible");
    let hits = library.filter(&carousel, "recipes");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].module(), "carousel");
    assert_eq!(ModuleFilter::from_str("all").ok(), Some(ModuleFilter::All));
}

#[test]
fn test_update_and_delete() {
    let mut library = sample_library();
    let id = *library.prompts()[1].id();

    let updated = library
        .update(
            &id,
            PromptUpdate::default()
                .with_title("Renamed")
                .with_tags(vec!["coast".to_string()]),
        )
        .expect("prompt exists");
    assert_eq!(updated.title(), "Renamed");
    assert_eq!(updated.content(), "A foggy coast");

    let removed = library.delete(&id).expect("prompt exists");
    assert_eq!(removed.title(), "Renamed");
    assert_eq!(library.len(), 2);
    assert!(library.get(&id).is_none());
    assert!(library.delete(&id).is_err());
}

#[test]
fn test_find_by_unique_prefix() {
    let library = sample_library();
    let target = &library.prompts()[0];
    let full = target.id().to_string();

    assert_eq!(library.find(&full).expect("full id").id(), target.id());
    assert_eq!(library.find(&full[..13]).expect("prefix").id(), target.id());
    assert!(library.find("").is_err());
    assert!(library.find("not-an-id").is_err());
}

#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("library.json");

    let library = sample_library();
    library.save_to(&path).expect("save library");
    let loaded = PromptLibrary::load(&path).expect("load library");

    assert_eq!(loaded, library);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().expect("temp dir");
    let loaded = PromptLibrary::load(dir.path().join("absent.json")).expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("library.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = PromptLibrary::load(&path).expect_err("corrupt file");
    assert!(err.to_string().contains("Corrupt library file"));
}

#[test]
fn test_saved_record_uses_camel_case_keys() {
    let saved = draft("video", "t", "c", &[]).into_saved(
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).single().expect("valid date"),
    );
    let json = serde_json::to_value(&saved).expect("encode");

    assert_eq!(json["createdAt"], "2025-03-14T09:30:00Z");
    assert_eq!(json["module"], "video");
    assert_eq!(json["settings"], serde_json::json!({}));
}
