//! Account link schema.

use orbis_types::{AccountLink, LinkView};

/// Render both sides of an account link.
pub fn render(link: &AccountLink) -> LinkView {
    LinkView {
        id: link.discord_id.clone(),
        uuid: link.uuid,
    }
}
