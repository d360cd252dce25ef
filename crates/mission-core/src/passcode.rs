//! Passcode Verification Flow
//!
//! A small state machine completing the secret mission of a group. The
//! flow owns the digit buffer; the UI only forwards events and renders
//! whatever state comes back.

use std::collections::HashMap;

/// Number of digits in a group code
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Static per-group secret codes
///
/// Codes are compared as strings: "0821" and "821" are different codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook {
    length: usize,
    codes: HashMap<String, String>,
}

impl Default for Codebook {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl Codebook {
    pub fn new(length: usize) -> Self {
        Self { length: length.max(1), codes: HashMap::new() }
    }

    /// Register a group code. Codes that are not exactly `length` ASCII
    /// digits are left out with a warning.
    pub fn with_code(mut self, group_id: impl Into<String>, code: &str) -> Self {
        let group_id = group_id.into();
        let code = code.trim();
        if code.chars().count() != self.length || !code.chars().all(|c| c.is_ascii_digit()) {
            log::warn!("ignoring code for group {}: expected {} digits", group_id, self.length);
            return self;
        }
        self.codes.insert(group_id, code.to_string());
        self
    }

    pub fn code_length(&self) -> usize {
        self.length
    }

    pub fn contains(&self, group_id: &str) -> bool {
        self.codes.contains_key(group_id)
    }

    /// Exact match against the group's code after trimming
    pub fn verify(&self, group_id: &str, attempt: &str) -> bool {
        self.codes
            .get(group_id)
            .map(|code| code == attempt.trim())
            .unwrap_or(false)
    }
}

/// Outcome of a completed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Granted { group_id: String },
    Rejected { group_id: String },
}

/// Digit buffer of an open passcode prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasscodeEntry {
    pub group_id: String,
    pub digits: Vec<Option<char>>,
    /// Position that should hold input focus
    pub focus: usize,
    /// Last attempt was rejected and nothing has been typed since
    pub rejected: bool,
}

impl PasscodeEntry {
    fn new(group_id: String, length: usize) -> Self {
        Self { group_id, digits: vec![None; length], focus: 0, rejected: false }
    }

    pub fn is_full(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    fn clear(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = None);
        self.focus = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingCode(PasscodeEntry),
}

/// Passcode prompt state machine
///
/// `Idle -> AwaitingCode -> (Granted -> Idle | Rejected -> AwaitingCode)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasscodeFlow {
    state: FlowState,
    length: usize,
}

impl Default for PasscodeFlow {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl PasscodeFlow {
    pub fn new(length: usize) -> Self {
        Self { state: FlowState::Idle, length: length.max(1) }
    }

    pub fn for_codebook(codebook: &Codebook) -> Self {
        Self::new(codebook.code_length())
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn entry(&self) -> Option<&PasscodeEntry> {
        match &self.state {
            FlowState::AwaitingCode(entry) => Some(entry),
            FlowState::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.entry().is_some()
    }

    pub fn code_length(&self) -> usize {
        self.length
    }

    /// Start a fresh prompt for `group_id`, discarding any previous buffer
    pub fn open(&mut self, group_id: impl Into<String>) {
        self.state = FlowState::AwaitingCode(PasscodeEntry::new(group_id.into(), self.length));
    }

    /// Cancel the prompt; nothing is persisted
    pub fn close(&mut self) {
        self.state = FlowState::Idle;
    }

    /// Put one digit at `index`. Non-digit input is dropped silently.
    /// Verifies automatically once every position is filled.
    pub fn enter_digit(&mut self, codebook: &Codebook, index: usize, input: &str) -> Option<Verdict> {
        let length = self.length;
        let FlowState::AwaitingCode(entry) = &mut self.state else {
            return None;
        };
        if index >= length {
            return None;
        }
        // the last typed digit wins when a box already held one
        let digit = input.chars().filter(char::is_ascii_digit).last()?;
        entry.digits[index] = Some(digit);
        entry.focus = (index + 1).min(length - 1);
        entry.rejected = false;
        self.verify(codebook)
    }

    /// Spread pasted digits from the first position
    pub fn paste(&mut self, codebook: &Codebook, text: &str) -> Option<Verdict> {
        let length = self.length;
        let FlowState::AwaitingCode(entry) = &mut self.state else {
            return None;
        };
        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).take(length).collect();
        if digits.is_empty() {
            return None;
        }
        entry.clear();
        for (slot, digit) in entry.digits.iter_mut().zip(&digits) {
            *slot = Some(*digit);
        }
        entry.focus = digits.len().min(length - 1);
        entry.rejected = false;
        self.verify(codebook)
    }

    /// Clear the digit at `index`, or the one before it when already empty
    pub fn backspace(&mut self, index: usize) {
        let FlowState::AwaitingCode(entry) = &mut self.state else {
            return;
        };
        if index >= entry.digits.len() {
            return;
        }
        if entry.digits[index].is_some() {
            entry.digits[index] = None;
            entry.focus = index;
        } else if index > 0 {
            entry.digits[index - 1] = None;
            entry.focus = index - 1;
        }
    }

    /// Check a full buffer against the codebook
    ///
    /// Does nothing while positions are still empty.
    pub fn verify(&mut self, codebook: &Codebook) -> Option<Verdict> {
        let FlowState::AwaitingCode(entry) = &mut self.state else {
            return None;
        };
        if !entry.is_full() {
            return None;
        }

        let group_id = entry.group_id.clone();
        if codebook.verify(&group_id, &entry.code()) {
            log::info!("passcode accepted for group {}", group_id);
            self.state = FlowState::Idle;
            Some(Verdict::Granted { group_id })
        } else {
            log::info!("passcode rejected for group {}", group_id);
            entry.clear();
            entry.rejected = true;
            Some(Verdict::Rejected { group_id })
        }
    }
}
