//! The keyboard facade: owns the rendered keys and their current fills.
//!
//! ```
//! use pianokeys::{Keyboard, KeyboardOptions, ClickEvent};
//!
//! let mut keyboard = Keyboard::new(&KeyboardOptions {
//!     lowest: Some("C4".into()),
//!     highest: Some("B4".into()),
//!     ..Default::default()
//! })?;
//! keyboard.fill_key("E4", None)?;
//! keyboard.set_on_key_click(|_event, key| println!("clicked {}", key.name));
//! keyboard.dispatch_click(&ClickEvent::on_target("52"));
//! let svg = keyboard.to_svg();
//! # assert!(svg.contains("viewBox"));
//! # Ok::<(), pianokeys::Error>(())
//! ```

use crate::error::Result;
use crate::model::{ClickEvent, KeyClick, KeyColorSet, KeyRect, LayoutParams, Note};
use crate::note::{midi_note_to_name, parse_note_name};
use crate::options::KeyboardOptions;
use crate::renderer::{compute_range, layout_keys, render_keyboard_to_svg, KeyboardLayout};

/// Click callback: receives the raw event and the resolved key.
pub type KeyClickCallback = Box<dyn FnMut(&ClickEvent, &KeyClick)>;

pub struct Keyboard {
    layout: KeyboardLayout,
    /// `index[note - lowest]` is the position of that note in `layout.keys`
    index: Vec<usize>,
    colors: KeyColorSet,
    params: LayoutParams,
    on_key_click: Option<KeyClickCallback>,
}

impl Keyboard {
    /// Build a keyboard over the configured range.
    ///
    /// Fails with `Error::Parse` for a bad bound name and `Error::Range`
    /// when the bounds are inverted or the black-key height ratio is out of
    /// bounds.
    pub fn new(options: &KeyboardOptions) -> Result<Self> {
        let (lowest, highest) = compute_range(options.lowest(), options.highest())?;
        let colors = options.colors();
        let params = options.layout_params()?;
        let layout = layout_keys(lowest, highest, &params, &colors)?;

        let mut index = vec![0; layout.keys.len()];
        for (i, key) in layout.keys.iter().enumerate() {
            index[(key.note - lowest) as usize] = i;
        }

        log::debug!(
            "built keyboard {}..={} ({} white, {} black keys), viewBox 0 0 {} {}",
            midi_note_to_name(lowest),
            midi_note_to_name(highest),
            layout.white_key_count,
            layout.keys.len() - layout.white_key_count,
            layout.width,
            layout.height
        );

        Ok(Self {
            layout,
            index,
            colors,
            params,
            on_key_click: None,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(&KeyboardOptions::from_json(json)?)
    }

    pub fn lowest(&self) -> Note {
        self.layout.lowest
    }

    pub fn highest(&self) -> Note {
        self.layout.highest
    }

    pub fn colors(&self) -> &KeyColorSet {
        &self.colors
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// All keys in draw order (white keys first).
    pub fn keys(&self) -> &[KeyRect] {
        &self.layout.keys
    }

    pub fn key(&self, note: Note) -> Option<&KeyRect> {
        self.position(note).map(|i| &self.layout.keys[i])
    }

    fn position(&self, note: Note) -> Option<usize> {
        let offset = usize::try_from(note.checked_sub(self.layout.lowest)?).ok()?;
        self.index.get(offset).copied()
    }

    /// Position of a named key, `None` (and a debug log) when the note is
    /// outside the keyboard.
    fn position_of_name(&self, name: &str) -> Result<Option<usize>> {
        let note = parse_note_name(name)?;
        let position = self.position(note);
        if position.is_none() {
            log::debug!("{name} is outside the keyboard range, ignoring");
        }
        Ok(position)
    }

    /// Highlight a key. Without `fill` the key kind's highlight color is used.
    /// A valid name outside the keyboard's range is ignored.
    pub fn fill_key(&mut self, name: &str, fill: Option<&str>) -> Result<()> {
        let Some(i) = self.position_of_name(name)? else {
            return Ok(());
        };
        let kind = self.layout.keys[i].kind;
        let key = &mut self.layout.keys[i];
        key.fill = fill.unwrap_or_else(|| self.colors.highlight_fill(kind)).to_string();
        log::trace!("fill {name} -> {}", key.fill);
        Ok(())
    }

    /// Reset a key to its base color. Out-of-range names are ignored.
    pub fn clear_key(&mut self, name: &str) -> Result<()> {
        let Some(i) = self.position_of_name(name)? else {
            return Ok(());
        };
        let key = &mut self.layout.keys[i];
        key.fill = self.colors.base_fill(key.kind).to_string();
        log::trace!("clear {name}");
        Ok(())
    }

    pub fn clear_all_keys(&mut self) {
        for key in &mut self.layout.keys {
            key.fill = self.colors.base_fill(key.kind).to_string();
        }
        log::trace!("cleared all keys");
    }

    /// Register the click callback, replacing any previous one.
    pub fn set_on_key_click<F>(&mut self, callback: F)
    where
        F: FnMut(&ClickEvent, &KeyClick) + 'static,
    {
        self.on_key_click = Some(Box::new(callback));
    }

    /// Note under a point in viewBox units. Black keys are drawn on top so
    /// they are tested first.
    pub fn key_at(&self, x: f64, y: f64) -> Option<Note> {
        self.layout
            .black_keys()
            .iter()
            .chain(self.layout.white_keys())
            .find(|key| key.contains(x, y))
            .map(|key| key.note)
    }

    /// Resolve a host click to a key and invoke the callback.
    ///
    /// The event's target id (a note number) wins over its position.
    /// Returns the clicked key, or `None` when the click hit no key.
    pub fn dispatch_click(&mut self, event: &ClickEvent) -> Option<KeyClick> {
        let note = match &event.target {
            Some(id) => id.parse::<Note>().ok().filter(|&n| self.position(n).is_some()),
            None => self.key_at(event.x, event.y),
        };
        let Some(note) = note else {
            log::debug!("click {event:?} did not hit a key");
            return None;
        };

        let click = KeyClick {
            note,
            name: midi_note_to_name(note),
        };
        if let Some(callback) = self.on_key_click.as_mut() {
            callback(event, &click);
        }
        Some(click)
    }

    /// Render the keyboard with its current fills.
    pub fn to_svg(&self) -> String {
        render_keyboard_to_svg(&self.layout)
    }

    /// Export the current key rectangles and surface size as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.layout).unwrap_or_else(|_| "{}".to_string())
    }
}

impl std::fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard")
            .field("lowest", &self.layout.lowest)
            .field("highest", &self.layout.highest)
            .field("keys", &self.layout.keys.len())
            .field("has_click_callback", &self.on_key_click.is_some())
            .finish()
    }
}
