use crate::{
    DecoderConfig, FrameKind, Language, NotificationRecord, NotificationStatus, Notifications,
    VanFrame,
};

/// Decoded information handed on to the reporting layer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// A frame of a kind the packet selection asks for
    Frame(FrameReport),
    /// The set of pending notifications changed
    Notifications(NotificationReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    pub kind: FrameKind,
    pub iden: u16,
    /// Route with the navigation traffic, see [`crate::is_satnav_frame`]
    pub satnav: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationReport {
    pub status: NotificationStatus,
    /// Language the texts are rendered in
    pub language: Language,
}

impl NotificationReport {
    pub fn records(&self) -> Notifications {
        self.status.records(self.language)
    }

    pub fn displayable(&self) -> impl Iterator<Item = NotificationRecord> {
        self.status.displayable(self.language)
    }

    pub fn current(&self) -> Option<NotificationRecord> {
        self.status.current(self.language)
    }
}

/// Consumer of captured frames, called once per frame from the main loop.
///
/// The only state kept between frames is the last known notification set, so
/// that a notification report is only produced when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    config: DecoderConfig,
    last_notifications: Option<NotificationStatus>,
}

impl Monitor {
    pub const fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            last_notifications: None,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Switches the language of later reports. The last notification set is
    /// forgotten on a change so the next status frame is reported again.
    pub fn set_language(&mut self, language: Language) {
        if self.config.language != language {
            self.config.language = language;
            self.last_notifications = None;
        }
    }

    pub fn last_notifications(&self) -> Option<&NotificationStatus> {
        self.last_notifications.as_ref()
    }

    /// Forgets the last known notification set; the next notification status
    /// frame is reported whatever its content.
    pub fn reset(&mut self) {
        self.last_notifications = None;
    }

    pub fn handle(&mut self, frame: &VanFrame) -> Option<Report> {
        let kind = frame.kind();

        if kind == FrameKind::CarStatus2 {
            return self.handle_notifications(frame);
        }

        if !self.config.selection.selects(kind) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Skipping frame {=u16:#X} ({})", frame.iden(), kind);

            return None;
        }

        Some(Report::Frame(FrameReport {
            kind,
            iden: frame.iden(),
            satnav: frame.is_satnav(),
        }))
    }

    fn handle_notifications(&mut self, frame: &VanFrame) -> Option<Report> {
        let status =
            match NotificationStatus::from_frame(frame, self.config.current_index_offset as usize) {
                Ok(status) => status,
                Err(_error) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Dropping notification frame: {}", _error);

                    return None;
                }
            };

        if self.last_notifications == Some(status) {
            return None;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Notifications changed: {} displayable, current {=u8:#X}",
            status.displayable(self.config.language).count(),
            status.current_index
        );

        self.last_notifications = Some(status);

        Some(Report::Notifications(NotificationReport {
            status,
            language: self.config.language,
        }))
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}
