use serde::{Deserialize, Serialize};

/// Distinguishes line and column selections in combo charts. Plain charts use
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectedValueType {
    #[default]
    None,
    Line,
    Column,
}

/// Indexes of a touched chart value, e.g. for a line chart `first_index` is
/// the line index and `second_index` the point index.
///
/// Equality ignores the cached pixel coordinates; two selections are the same
/// when their indexes and type match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectedValue {
    pub first_index: i32,
    pub second_index: i32,
    pub value_type: SelectedValueType,
    pub selected_x: f32,
    pub selected_y: f32,
}

impl Default for SelectedValue {
    fn default() -> Self {
        let mut value = Self {
            first_index: 0,
            second_index: 0,
            value_type: SelectedValueType::None,
            selected_x: 0.0,
            selected_y: 0.0,
        };
        value.clear();
        value
    }
}

impl SelectedValue {
    #[must_use]
    pub fn new(first_index: i32, second_index: i32, value_type: SelectedValueType) -> Self {
        Self {
            first_index,
            second_index,
            value_type,
            selected_x: 0.0,
            selected_y: 0.0,
        }
    }

    pub fn set(&mut self, first_index: i32, second_index: i32, value_type: SelectedValueType) {
        self.first_index = first_index;
        self.second_index = second_index;
        self.value_type = value_type;
    }

    pub fn clear(&mut self) {
        self.set(i32::MIN, i32::MIN, SelectedValueType::None);
    }

    /// True when the selection points at an actual value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.first_index >= 0 && self.second_index >= 0
    }
}

impl PartialEq for SelectedValue {
    fn eq(&self, other: &Self) -> bool {
        self.first_index == other.first_index
            && self.second_index == other.second_index
            && self.value_type == other.value_type
    }
}

impl Eq for SelectedValue {}
