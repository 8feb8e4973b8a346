//! Form submit, blur and input handling plus banner lifetimes.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::fmt;

use serde::Serialize;

use crate::SiteError;
use crate::action::Action;
use crate::config::SubmitMode;
use crate::consts::SUBMIT_FAILED_MESSAGE;
use crate::engine::SiteCore;
use crate::error::SubmitError;
use crate::form::{self, FieldRule, FieldValues, FormKind, Submission};
use crate::schedule::TimerKey;

/// Identifies one rendered banner for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub id: BannerId,
    pub form: FormKind,
    pub tone: BannerTone,
    pub message: String,
}

fn rule_for(kind: FormKind, field: &str) -> Result<&'static FieldRule, SiteError> {
    kind.field(field).ok_or_else(|| SiteError::UnknownField { form: kind, field: field.to_owned() })
}

impl SiteCore {
    /// Submit pressed. Clears old errors, validates every rule in order and
    /// either annotates the failures or hands the submission off.
    pub fn on_submit(&mut self, kind: FormKind, values: &FieldValues) -> Vec<Action> {
        if self.ui.busy_forms.contains(&kind) {
            log::debug!("{kind} form already submitting, ignoring");
            return Vec::new();
        }
        let mut out: Vec<Action> = kind
            .fields()
            .iter()
            .map(|rule| Action::SetFieldError { form: kind, field: rule.id, message: None })
            .collect();
        match form::validate(kind, values) {
            Ok(submission) => self.begin_submission(submission, &mut out),
            Err(errors) => {
                log::debug!("{kind} form blocked by {} field error(s)", errors.len());
                out.extend(errors.into_iter().map(|err| Action::SetFieldError {
                    form: kind,
                    field: err.field,
                    message: Some(err.message),
                }));
            }
        }
        out
    }

    /// A field lost focus: re-run just its rule.
    pub fn on_field_blur(&mut self, kind: FormKind, field: &str, value: &str) -> Vec<Action> {
        match rule_for(kind, field) {
            Ok(rule) => {
                let message = rule.check(value).err().map(|e| e.message);
                vec![Action::SetFieldError { form: kind, field: rule.id, message }]
            }
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// A field was edited: clear only its error.
    pub fn on_field_input(&mut self, kind: FormKind, field: &str) -> Vec<Action> {
        match rule_for(kind, field) {
            Ok(rule) => vec![Action::SetFieldError { form: kind, field: rule.id, message: None }],
            Err(err) => {
                log::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// Outcome reported by an external submitter.
    pub fn on_submit_result(&mut self, kind: FormKind, result: Result<(), SubmitError>) -> Vec<Action> {
        let mut out = Vec::new();
        self.complete_submission(kind, result, &mut out);
        out
    }

    #[must_use]
    pub fn banners(&self) -> &[Banner] {
        &self.ui.banners
    }

    fn begin_submission(&mut self, submission: Submission, out: &mut Vec<Action>) {
        let kind = submission.kind;
        self.ui.busy_forms.insert(kind);
        out.push(Action::SetSubmitBusy { form: kind, busy: true });
        let simulated_latency = match &self.config.submit {
            SubmitMode::Simulated { latency_ms } => Some(*latency_ms),
            SubmitMode::Endpoint { .. } => None,
        };
        if let Some(latency_ms) = simulated_latency {
            log::info!("simulating {kind} submission with {} field(s)", submission.fields.len());
            self.arm(TimerKey::SubmitLatency(kind), latency_ms, out);
        } else {
            out.push(Action::Submit(submission));
        }
    }

    pub(crate) fn complete_submission(&mut self, kind: FormKind, result: Result<(), SubmitError>, out: &mut Vec<Action>) {
        if !self.ui.busy_forms.remove(&kind) {
            log::warn!("submission result for idle {kind} form ignored");
            return;
        }
        out.push(Action::SetSubmitBusy { form: kind, busy: false });
        match result {
            Ok(()) => {
                self.show_banner(kind, BannerTone::Success, kind.success_message().to_owned(), out);
                out.push(Action::ResetForm(kind));
            }
            Err(err) => {
                log::warn!("{kind} submission failed: {err}");
                self.show_banner(kind, BannerTone::Error, SUBMIT_FAILED_MESSAGE.to_owned(), out);
            }
        }
    }

    fn show_banner(&mut self, form: FormKind, tone: BannerTone, message: String, out: &mut Vec<Action>) {
        self.ui.next_banner += 1;
        let banner = Banner { id: BannerId(self.ui.next_banner), form, tone, message };
        self.ui.banners.push(banner.clone());
        out.push(Action::ShowBanner(banner.clone()));
        self.arm(TimerKey::BannerDismiss(banner.id), self.config.banner_lifetime_ms, out);
    }

    pub(crate) fn dismiss_banner(&mut self, id: BannerId, out: &mut Vec<Action>) {
        let before = self.ui.banners.len();
        self.ui.banners.retain(|b| b.id != id);
        if self.ui.banners.len() < before {
            out.push(Action::RemoveBanner(id));
        }
    }
}
