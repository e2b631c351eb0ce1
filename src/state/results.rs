use crate::remote::model::{RawSearchItem, ResultKind};

pub const TITLE_PLACEHOLDER: &str = "Sans titre";
pub const ARTIST_PLACEHOLDER: &str = "Artiste inconnu";
pub const OWNER_PLACEHOLDER: &str = "Utilisateur inconnu";

/// One displayable search result. The label doubles as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub label: String,
    pub uri: String,
    pub kind: ResultKind,
    pub thumbnail: Option<String>,
}

/// Turns raw catalog items into displayable entries: items without a
/// playable reference are dropped, labels follow the per-kind templates,
/// and on a label collision the last item wins while keeping the first
/// occurrence's position.
pub fn ingest(items: Vec<RawSearchItem>) -> Vec<SearchEntry> {
    let mut entries: Vec<SearchEntry> = Vec::with_capacity(items.len());
    for item in items {
        if item.uri.is_empty() {
            continue;
        }
        let entry = SearchEntry {
            label: display_label(&item),
            thumbnail: thumbnail_of(&item),
            uri: item.uri,
            kind: item.kind,
        };
        match entries.iter().position(|existing| existing.label == entry.label) {
            Some(index) => entries[index] = entry,
            None => entries.push(entry),
        }
    }
    entries
}

fn display_label(item: &RawSearchItem) -> String {
    match item.kind {
        ResultKind::Track | ResultKind::Album => format!(
            "{} – {}",
            item.name.as_deref().unwrap_or(TITLE_PLACEHOLDER),
            item.artist.as_deref().unwrap_or(ARTIST_PLACEHOLDER),
        ),
        ResultKind::Artist => item
            .name
            .clone()
            .unwrap_or_else(|| ARTIST_PLACEHOLDER.to_string()),
        ResultKind::Playlist => format!(
            "{} – {}",
            item.name.as_deref().unwrap_or(TITLE_PLACEHOLDER),
            item.owner.as_deref().unwrap_or(OWNER_PLACEHOLDER),
        ),
    }
}

fn thumbnail_of(item: &RawSearchItem) -> Option<String> {
    match item.kind {
        // A track's artwork lives on its album.
        ResultKind::Track => item.album_artwork.first().cloned(),
        _ => item.artwork.first().cloned(),
    }
}

/// The last-fetched result set, replaced wholesale on every search. The
/// selected entry is an explicit field here, never read back from
/// rendered widgets.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    entries: Vec<SearchEntry>,
    selected: Option<String>,
    cursor: usize,
}

impl ResultsState {
    pub fn replace(&mut self, entries: Vec<SearchEntry>) {
        self.entries = entries;
        self.selected = None;
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&SearchEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn selected(&self) -> Option<&SearchEntry> {
        self.selected.as_deref().and_then(|label| self.get(label))
    }

    pub fn select(&mut self, label: &str) -> bool {
        if self.get(label).is_some() {
            self.selected = Some(label.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_entry(&self) -> Option<&SearchEntry> {
        self.entries.get(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn select_at_cursor(&mut self) {
        if let Some(entry) = self.entries.get(self.cursor) {
            self.selected = Some(entry.label.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artist: &str, uri: &str) -> RawSearchItem {
        let mut item = RawSearchItem::new(ResultKind::Track, uri);
        item.name = Some(name.to_string());
        item.artist = Some(artist.to_string());
        item
    }

    #[test]
    fn track_label_follows_title_dash_artist_template() {
        let entries = ingest(vec![track("Yesterday", "The Beatles", "spotify:track:1")]);
        assert_eq!(entries[0].label, "Yesterday – The Beatles");
    }

    #[test]
    fn album_label_follows_name_dash_artist_template() {
        let mut item = RawSearchItem::new(ResultKind::Album, "spotify:album:1");
        item.name = Some("Abbey Road".to_string());
        item.artist = Some("The Beatles".to_string());
        assert_eq!(ingest(vec![item])[0].label, "Abbey Road – The Beatles");
    }

    #[test]
    fn artist_label_is_the_bare_name() {
        let mut item = RawSearchItem::new(ResultKind::Artist, "spotify:artist:1");
        item.name = Some("The Beatles".to_string());
        assert_eq!(ingest(vec![item])[0].label, "The Beatles");
    }

    #[test]
    fn playlist_label_uses_owner_display_name() {
        let mut item = RawSearchItem::new(ResultKind::Playlist, "spotify:playlist:1");
        item.name = Some("Road Trip".to_string());
        item.owner = Some("alice".to_string());
        assert_eq!(ingest(vec![item])[0].label, "Road Trip – alice");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let nameless_track = RawSearchItem::new(ResultKind::Track, "spotify:track:1");
        let nameless_artist = RawSearchItem::new(ResultKind::Artist, "spotify:artist:1");
        let ownerless_playlist = {
            let mut item = RawSearchItem::new(ResultKind::Playlist, "spotify:playlist:1");
            item.name = Some("Mix".to_string());
            item
        };

        let entries = ingest(vec![nameless_track, nameless_artist, ownerless_playlist]);
        assert_eq!(entries[0].label, "Sans titre – Artiste inconnu");
        assert_eq!(entries[1].label, "Artiste inconnu");
        assert_eq!(entries[2].label, "Mix – Utilisateur inconnu");
    }

    #[test]
    fn items_without_playable_reference_are_dropped() {
        let entries = ingest(vec![
            track("Yesterday", "The Beatles", ""),
            track("Help!", "The Beatles", "spotify:track:2"),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Help! – The Beatles");
    }

    #[test]
    fn track_thumbnail_comes_from_album_artwork() {
        let mut item = track("Yesterday", "The Beatles", "spotify:track:1");
        item.album_artwork = vec!["https://img/album-big".to_string(), "https://img/album-small".to_string()];
        item.artwork = vec!["https://img/own".to_string()];
        assert_eq!(
            ingest(vec![item])[0].thumbnail.as_deref(),
            Some("https://img/album-big")
        );
    }

    #[test]
    fn non_track_thumbnail_comes_from_own_artwork() {
        let mut item = RawSearchItem::new(ResultKind::Artist, "spotify:artist:1");
        item.name = Some("The Beatles".to_string());
        item.artwork = vec!["https://img/artist".to_string()];
        assert_eq!(
            ingest(vec![item])[0].thumbnail.as_deref(),
            Some("https://img/artist")
        );
    }

    #[test]
    fn label_collision_keeps_position_and_takes_last_item() {
        let first = track("Yesterday", "The Beatles", "spotify:track:1");
        let other = track("Help!", "The Beatles", "spotify:track:2");
        let replacement = track("Yesterday", "The Beatles", "spotify:track:3");

        let entries = ingest(vec![first, other, replacement]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Yesterday – The Beatles");
        assert_eq!(entries[0].uri, "spotify:track:3");
        assert_eq!(entries[1].label, "Help! – The Beatles");
    }

    #[test]
    fn replace_resets_selection_and_cursor() {
        let mut state = ResultsState::default();
        state.replace(ingest(vec![
            track("Yesterday", "The Beatles", "spotify:track:1"),
            track("Help!", "The Beatles", "spotify:track:2"),
        ]));
        state.cursor_down();
        state.select_at_cursor();
        assert_eq!(state.selected().unwrap().label, "Help! – The Beatles");

        state.replace(ingest(vec![track("Let It Be", "The Beatles", "spotify:track:3")]));
        assert!(state.selected().is_none());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn select_rejects_unknown_labels() {
        let mut state = ResultsState::default();
        state.replace(ingest(vec![track("Yesterday", "The Beatles", "spotify:track:1")]));
        assert!(!state.select("Nowhere Man – The Beatles"));
        assert!(state.select("Yesterday – The Beatles"));
    }
}
