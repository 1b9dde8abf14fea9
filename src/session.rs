use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::poster::PosterData;

/// Where the session is in its lifecycle. One explicit value instead of a
/// pile of independent flags, so states like "editing with no poster" cannot
/// be represented at all.
///
/// Transitions: Idle -> Generating -> Shown <-> Editing, and anything back to
/// Idle via `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    #[default]
    Idle,
    Generating,
    Shown,
    Editing,
}

/// The working session: the committed poster, the edit draft (present exactly
/// while editing), and the last uploaded image. Lives in a JSON file for the
/// duration of a working session; deleting the file discards everything.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub phase: SessionPhase,
    #[serde(default)]
    pub poster: Option<PosterData>,
    #[serde(default)]
    pub draft: Option<PosterData>,
    /// Inline `data:` URL of the last uploaded image. Survives `close` and
    /// overrides scraped images on every later generation.
    #[serde(default)]
    pub uploaded_image: Option<String>,
    #[serde(default)]
    pub generated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Session {
    /// Read the session file from the specified path if it exists, otherwise return a new (empty) one.
    pub fn read_from_or_new(file_path: &str) -> anyhow::Result<Session> {
        match std::fs::read_to_string(file_path) {
            Ok(session_str) => {
                log::debug!("Loading session file {file_path}");
                Ok(serde_json::from_str::<Session>(&session_str)?)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Session file {file_path} does not exist, starting an empty session");
                Ok(Session::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn write_to(&self, file_path: &str) -> anyhow::Result<()> {
        let session_str = serde_json::to_string_pretty(self)?;
        std::fs::write(file_path, session_str)?;
        Ok(())
    }

    /// The poster a renderer should show: the draft while editing, the
    /// committed copy otherwise.
    pub fn active_poster(&self) -> Option<&PosterData> {
        match self.phase {
            SessionPhase::Editing => self.draft.as_ref(),
            _ => self.poster.as_ref(),
        }
    }

    /// Guard for the single outstanding generation. Editing is abandoned by a
    /// regeneration, same as committing a brand-new poster over the old one.
    pub fn begin_generate(&mut self) -> anyhow::Result<()> {
        if self.phase == SessionPhase::Generating {
            bail!("A generation is already in flight; run 'close' if the session is stuck");
        }
        self.phase = SessionPhase::Generating;
        self.draft = None;
        Ok(())
    }

    pub fn finish_generate(&mut self, poster: PosterData) {
        self.poster = Some(poster);
        self.draft = None;
        self.generated_at = Some(chrono::Utc::now());
        self.phase = SessionPhase::Shown;
    }

    /// Enter edit mode. The draft starts as a field-wise clone of the
    /// committed poster.
    pub fn begin_edit(&mut self) -> anyhow::Result<()> {
        match self.phase {
            SessionPhase::Shown => {}
            SessionPhase::Editing => bail!("Already editing"),
            SessionPhase::Idle | SessionPhase::Generating => {
                bail!("No poster to edit; generate one first")
            }
        }

        let Some(ref poster) = self.poster else {
            bail!("No poster to edit; generate one first");
        };
        self.draft = Some(poster.clone());
        self.phase = SessionPhase::Editing;
        Ok(())
    }

    /// The draft, for field updates. Only available while editing.
    pub fn draft_mut(&mut self) -> anyhow::Result<&mut PosterData> {
        if self.phase != SessionPhase::Editing {
            bail!("Not editing; run 'edit' first");
        }
        match self.draft {
            Some(ref mut draft) => Ok(draft),
            None => bail!("Not editing; run 'edit' first"),
        }
    }

    /// Commit the draft as the new poster and leave edit mode.
    pub fn save(&mut self) -> anyhow::Result<()> {
        if self.phase != SessionPhase::Editing {
            bail!("Not editing; nothing to save");
        }
        self.poster = self.draft.take();
        self.phase = SessionPhase::Shown;
        Ok(())
    }

    /// Discard all draft changes and leave edit mode.
    pub fn cancel(&mut self) -> anyhow::Result<()> {
        if self.phase != SessionPhase::Editing {
            bail!("Not editing; nothing to cancel");
        }
        self.draft = None;
        self.phase = SessionPhase::Shown;
        Ok(())
    }

    /// Record an uploaded image. Always lands in the uploaded-image slot;
    /// additionally replaces the draft's image while editing.
    pub fn set_uploaded_image(&mut self, data_url: String) {
        if self.phase == SessionPhase::Editing {
            if let Some(ref mut draft) = self.draft {
                draft.image = Some(data_url.clone());
            }
        }
        self.uploaded_image = Some(data_url);
    }

    /// Dismiss the poster. The uploaded image is kept so it can seed the next
    /// generation. Also the escape hatch for a session stuck in `Generating`
    /// after a crash.
    pub fn close(&mut self) -> anyhow::Result<()> {
        if self.phase == SessionPhase::Idle {
            bail!("No poster to close");
        }
        self.poster = None;
        self.draft = None;
        self.generated_at = None;
        self.phase = SessionPhase::Idle;
        Ok(())
    }
}
