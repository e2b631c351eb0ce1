use crate::remote::model::RawDevice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub name: String,
    pub id: String,
}

/// The last-fetched device list, replaced wholesale on each refresh.
/// Devices without a usable identifier are excluded at ingestion.
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    entries: Vec<DeviceEntry>,
    selected: Option<String>,
    cursor: usize,
}

impl DeviceState {
    /// Replaces the device set. The previous selection survives if its
    /// name is still present; otherwise selection falls back to the first
    /// entry, or to none when the set is empty.
    pub fn replace(&mut self, devices: Vec<RawDevice>) {
        let entries: Vec<DeviceEntry> = devices
            .into_iter()
            .filter_map(|device| match device.id {
                Some(id) if !id.is_empty() => Some(DeviceEntry {
                    name: device.name,
                    id,
                }),
                _ => None,
            })
            .collect();

        self.selected = self
            .selected
            .take()
            .filter(|name| entries.iter().any(|entry| &entry.name == name))
            .or_else(|| entries.first().map(|entry| entry.name.clone()));
        self.cursor = 0;
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.cursor = 0;
    }

    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn select(&mut self, name: &str) -> bool {
        if self.entries.iter().any(|entry| entry.name == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        let name = self.selected.as_deref()?;
        self.id_of(name)
    }

    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.id.as_str())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
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
            self.selected = Some(entry.name.clone());
        }
    }
}
