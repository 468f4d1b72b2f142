//! Core domain types for the forum front-end client.
//!
//! The web page addresses its widgets through fixed selectors and class
//! names; this module captures that surface as data on typed identifiers
//! instead of scattering string lookups through the call sites.

use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive inbox panels in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelId {
    /// Primary notifications (replies, mentions, follows).
    Notifications,
    /// Achievement / reputation notifications.
    Achievements,
    /// Pending review items.
    Reviews,
}

impl PanelId {
    /// Returns all panels, in header order.
    pub fn all() -> &'static [PanelId] {
        &[
            PanelId::Notifications,
            PanelId::Achievements,
            PanelId::Reviews,
        ]
    }

    /// Returns the display name for this panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelId::Notifications => "Notifications",
            PanelId::Achievements => "Achievements",
            PanelId::Reviews => "Reviews",
        }
    }

    /// Returns the tag selector of the panel's container element.
    ///
    /// `acvhieveDiv` is misspelled in the deployed markup; the selector has
    /// to match the page, not the dictionary.
    pub fn container_selector(&self) -> &'static str {
        match self {
            PanelId::Notifications => "myDiv",
            PanelId::Achievements => "acvhieveDiv",
            PanelId::Reviews => "reviewDiv",
        }
    }

    /// Returns the class of the panel's inline icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            PanelId::Notifications => "myInboxSVG",
            PanelId::Achievements => "achieveSVG",
            PanelId::Reviews => "reviewSVG",
        }
    }

    /// Returns the class of the icon's outer (background) element.
    pub fn icon_outer_class(&self) -> &'static str {
        match self {
            PanelId::Notifications => "myInboxSVGOuter",
            PanelId::Achievements => "achieveSVGOuter",
            PanelId::Reviews => "reviewSVGOuter",
        }
    }

    /// Returns the selector of the unread badge element, if the panel has one.
    pub fn badge_selector(&self) -> Option<&'static str> {
        match self {
            PanelId::Notifications => Some(".button__badge"),
            PanelId::Achievements => Some(".unseen-reputation"),
            PanelId::Reviews => None,
        }
    }

    /// Returns the selector of the unread count label, if the panel has one.
    pub fn count_selector(&self) -> Option<&'static str> {
        match self {
            PanelId::Notifications => Some(".js-unread-count._important"),
            PanelId::Achievements => Some(".js-unread-count._positive"),
            PanelId::Reviews => None,
        }
    }

    /// Returns the server path that marks this category fully read.
    ///
    /// Reviews have no read-marking endpoint; opening that panel must never
    /// produce a request.
    pub fn read_endpoint(&self) -> Option<&'static str> {
        match self {
            PanelId::Notifications => Some("/notification/read_All_Notifications/"),
            PanelId::Achievements => Some("/notification/read_All_Priv_Notifications/"),
            PanelId::Reviews => None,
        }
    }

    /// Returns the count-label text shown after a successful read-mark.
    ///
    /// Notifications reset to `0`, achievements to `+0`. The asymmetry is
    /// deliberate: the reputation counter always renders with a sign.
    pub fn cleared_count_label(&self) -> Option<&'static str> {
        match self {
            PanelId::Notifications => Some("0"),
            PanelId::Achievements => Some("+0"),
            PanelId::Reviews => None,
        }
    }
}

/// The kind of post a share action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostKind {
    Question,
    Answer,
}

impl PostKind {
    /// Returns the wire name sent in the `post_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Question => "question",
            PostKind::Answer => "answer",
        }
    }
}

/// Identifier of a question or answer, as carried in `data-post-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId(s.to_string())
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        PostId(s)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The three share actions a post offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareKind {
    /// Plain share.
    Share,
    /// Repost to the user's own feed.
    Repost,
    /// Repost with commentary.
    Quote,
}

impl ShareKind {
    /// Returns the wire name sent in the `share_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareKind::Share => "share",
            ShareKind::Repost => "repost",
            ShareKind::Quote => "quote",
        }
    }

    /// Returns the toast copy shown when the action succeeds.
    pub fn success_message(&self) -> &'static str {
        match self {
            ShareKind::Share => "Post shared successfully!",
            ShareKind::Repost => "Post reposted!",
            ShareKind::Quote => "Post quoted successfully!",
        }
    }

    /// Returns the toast copy shown when the action fails.
    pub fn error_message(&self) -> &'static str {
        match self {
            ShareKind::Share => "Error sharing post",
            ShareKind::Repost => "Error reposting",
            ShareKind::Quote => "Error quoting post",
        }
    }
}

/// An outbound share action, ready to be form-encoded for `/qa/share-post/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub post_id: PostId,
    pub post_kind: PostKind,
    pub share_kind: ShareKind,
    /// Commentary text; only present for [`ShareKind::Quote`].
    pub quote_text: Option<String>,
}

impl ShareRequest {
    /// Creates a share or repost request.
    pub fn new(post_id: impl Into<PostId>, post_kind: PostKind, share_kind: ShareKind) -> Self {
        Self {
            post_id: post_id.into(),
            post_kind,
            share_kind,
            quote_text: None,
        }
    }

    /// Creates a quote request with commentary.
    pub fn quote(post_id: impl Into<PostId>, post_kind: PostKind, text: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            post_kind,
            share_kind: ShareKind::Quote,
            quote_text: Some(text.into()),
        }
    }

    /// Returns the form fields for the share endpoint.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("post_id", self.post_id.0.clone()),
            ("post_type", self.post_kind.as_str().to_string()),
            ("share_type", self.share_kind.as_str().to_string()),
        ];
        if let Some(text) = &self.quote_text {
            fields.push(("quote_text", text.clone()));
        }
        fields
    }
}
