use serde::{Deserialize, Deserializer, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Reference {
    pub title: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    #[serde(default, deserialize_with = "number_as_string")]
    pub number: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, alias = "sub_genre")]
    pub sub_genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lyrics: String,
    #[serde(alias = "youtube_id")]
    pub youtube_id: String,
    #[serde(default, alias = "youtube_url")]
    pub youtube_url: String,
    #[serde(default, alias = "spotify_id", deserialize_with = "non_empty_string")]
    pub spotify_id: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub duration: Option<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Song {
    /// `"{genre} · {subGenre}"`, or whichever half is present.
    pub fn genre_label(&self) -> String {
        match (self.genre.trim(), self.sub_genre.trim()) {
            ("", "") => String::new(),
            (genre, "") => genre.to_string(),
            ("", sub) => sub.to_string(),
            (genre, sub) => format!("{genre} · {sub}"),
        }
    }

    pub fn duration_label(&self) -> Option<String> {
        self.duration
            .as_ref()
            .map(|duration| format!("Duration: {duration}"))
    }

    pub fn has_spotify(&self) -> bool {
        self.spotify_id.is_some()
    }
}

/// Songs are owned by the catalog and handed out as shared handles.
pub type SharedSong = Rc<Song>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub songs: Vec<SharedSong>,
    pub references: Vec<Reference>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogDocument {
    pub songs: Vec<Song>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        Self {
            songs: document.songs.into_iter().map(Rc::new).collect(),
            references: document.references,
        }
    }
}

fn number_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Int(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Int(value)) => value.to_string(),
        Some(RawNumber::Float(value)) => value.to_string(),
        Some(RawNumber::Text(value)) => value,
        None => String::new(),
    })
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_reads_camel_case_fields() {
        let song: Song = serde_json::from_str(
            r#"{
                "id": "s1",
                "number": 7,
                "title": "Tide",
                "artist": "Mara",
                "subGenre": "Dream Pop",
                "genre": "Pop",
                "youtubeId": "abc",
                "youtubeUrl": "https://youtu.be/abc",
                "spotifyId": "xyz",
                "tags": ["sea", "night"]
            }"#,
        )
        .unwrap();

        assert_eq!(song.number, "7");
        assert_eq!(song.sub_genre, "Dream Pop");
        assert_eq!(song.spotify_id.as_deref(), Some("xyz"));
        assert_eq!(song.tags, vec!["sea", "night"]);
        assert_eq!(song.genre_label(), "Pop · Dream Pop");
        assert!(song.duration_label().is_none());
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let song: Song = serde_json::from_str(
            r#"{
                "id": "s2",
                "number": "02",
                "title": "Dust",
                "artist": "Kel",
                "youtubeId": "def",
                "spotifyId": "  ",
                "duration": ""
            }"#,
        )
        .unwrap();

        assert_eq!(song.number, "02");
        assert!(!song.has_spotify());
        assert!(song.duration.is_none());
        assert_eq!(song.genre_label(), "");
    }

    #[test]
    fn duration_label_is_prefixed() {
        let song = Song {
            duration: Some("3:41".to_string()),
            ..Song::default()
        };
        assert_eq!(song.duration_label().as_deref(), Some("Duration: 3:41"));
    }
}
