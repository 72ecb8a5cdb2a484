use hashbrown::HashMap;

/// Assigns dense ids to tokens in order of first appearance.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    ids: HashMap<String, u32>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the token, registering it if it is new.
    ///
    /// # Panics
    ///
    /// Panics if `u32::MAX` distinct tokens are already registered. The id `u32::MAX` is never
    /// assigned.
    pub fn get_or_insert_id(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.ids.get(token) {
            id
        } else {
            assert!(self.words.len() < u32::MAX as usize, "vocabulary is full");
            let id = self.words.len() as u32;
            self.words.push(token.to_string());
            self.ids.insert(token.to_string(), id);
            id
        }
    }

    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    pub fn word(&self, id: u32) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
