//! Scripted lightbox navigation.

use std::str::FromStr;

use anyhow::Result;
use lapki_commerce::gallery::GallerySelection;
use lapki_commerce::{StoreError, Storefront};
use serde::Serialize;

use super::GalleryArgs;
use crate::context::Context;

/// One lightbox action from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Open(usize),
    Next,
    Previous,
    Close,
}

impl GalleryAction {
    /// Dispatch the action into the storefront.
    pub fn apply(self, store: &mut Storefront) -> Result<GallerySelection, StoreError> {
        match self {
            GalleryAction::Open(index) => store.open_image(index),
            GalleryAction::Next => store.next_image(),
            GalleryAction::Previous => store.previous_image(),
            GalleryAction::Close => store.close_image(),
        }
    }
}

impl FromStr for GalleryAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("open", raw)) => raw
                .parse()
                .map(GalleryAction::Open)
                .map_err(|_| format!("invalid image index '{}'", raw)),
            None if s == "next" => Ok(GalleryAction::Next),
            None if s == "prev" || s == "previous" => Ok(GalleryAction::Previous),
            None if s == "close" => Ok(GalleryAction::Close),
            _ => Err(format!(
                "unknown gallery action '{}' (expected open:<index>, next, prev or close)",
                s
            )),
        }
    }
}

#[derive(Serialize)]
struct Step {
    action: String,
    selection: GallerySelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

/// Run the gallery command.
pub fn run(args: GalleryArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.open_store();
    let mut steps = Vec::with_capacity(args.actions.len());

    for action in args.actions {
        let selection = action.apply(&mut session.store)?;
        let image = session
            .store
            .lightbox()
            .and_then(|l| l.current_image())
            .map(|i| i.alt.clone());

        let label = session
            .store
            .lightbox()
            .and_then(|l| l.position_label())
            .unwrap_or_else(|| "закрыто".to_string());
        ctx.output.kv(
            &format!("{:?}", action),
            &format!("{} {}", label, image.as_deref().unwrap_or("")),
        );

        steps.push(Step {
            action: format!("{:?}", action),
            selection,
            image,
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&steps);
    }
    Ok(())
}
