//! The cleanup target registry.
//!
//! Targets are data, not code: a fixed table of tagged records built once at
//! process start and read-only afterwards. The `kind` discriminant decides
//! which deletion strategy applies, so a command line can never be mistaken
//! for a filesystem path.

use crate::error::{Result, SweepError};

/// Informational risk classification shown to the user.
///
/// Never gates execution; it only biases the default selection and the
/// glyph shown next to each target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyTier {
    Safe,
    Caution,
    Advanced,
}

impl SafetyTier {
    /// Human label for tables and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "Safe",
            SafetyTier::Caution => "Caution",
            SafetyTier::Advanced => "Advanced",
        }
    }
}

/// How a target is cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// Bulk-clear the contents of a directory, preserving the directory
    /// itself. The path may carry an unexpanded `~` placeholder.
    Directory { path: String },
    /// Run a fixed external maintenance command.
    Command { command_line: String },
}

/// One named, independently cleanable cache location or maintenance command.
#[derive(Debug, Clone)]
pub struct CleanupTarget {
    /// Unique human label.
    pub name: String,
    /// Locator plus strategy discriminant.
    pub kind: TargetKind,
    /// Informational description, no behavioral effect.
    pub description: String,
    /// Informational size hint, no behavioral effect.
    pub typical_size: String,
    pub safety: SafetyTier,
    /// Seeds the selection prompt's initial checked state.
    pub default_selected: bool,
}

impl CleanupTarget {
    /// The raw locator string (path or command line) for this target.
    pub fn locator(&self) -> &str {
        match &self.kind {
            TargetKind::Directory { path } => path,
            TargetKind::Command { command_line } => command_line,
        }
    }
}

fn directory(
    name: &str,
    path: &str,
    description: &str,
    typical_size: &str,
    safety: SafetyTier,
    default_selected: bool,
) -> CleanupTarget {
    CleanupTarget {
        name: name.to_string(),
        kind: TargetKind::Directory {
            path: path.to_string(),
        },
        description: description.to_string(),
        typical_size: typical_size.to_string(),
        safety,
        default_selected,
    }
}

fn command(
    name: &str,
    command_line: &str,
    description: &str,
    typical_size: &str,
    safety: SafetyTier,
    default_selected: bool,
) -> CleanupTarget {
    CleanupTarget {
        name: name.to_string(),
        kind: TargetKind::Command {
            command_line: command_line.to_string(),
        },
        description: description.to_string(),
        typical_size: typical_size.to_string(),
        safety,
        default_selected,
    }
}

/// The built-in registry of Xcode cleanup targets.
pub fn builtin() -> Vec<CleanupTarget> {
    vec![
        directory(
            "Derived Data",
            "~/Library/Developer/Xcode/DerivedData",
            "Build artifacts and intermediate files. Safe to delete - Xcode will rebuild them.",
            "5-50GB",
            SafetyTier::Safe,
            true,
        ),
        command(
            "Unavailable Simulators",
            "xcrun simctl delete unavailable",
            "Removes old iOS Simulator instances that are no longer available.",
            "Varies",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "Device Support Files",
            "~/Library/Developer/Xcode/iOS DeviceSupport",
            "Support files for old iOS versions from connected devices.",
            "1-10GB",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "Simulator Caches",
            "~/Library/Developer/CoreSimulator/Caches",
            "Cache files from iOS Simulators. Safe to delete - simulators will recreate them.",
            "1-5GB",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "Archives",
            "~/Library/Developer/Xcode/Archives",
            "Old app builds (.xcarchive files). Only delete if you don't need old builds.",
            "1-20GB",
            SafetyTier::Caution,
            false,
        ),
        directory(
            "Device Logs",
            "~/Library/Developer/Xcode/iOS Device Logs",
            "Debug logs from connected iOS devices. Safe to delete.",
            "100MB-1GB",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "Swift Package Manager Cache",
            "~/Library/Caches/org.swift.swiftpm",
            "Downloaded Swift packages. Safe to delete - they'll be re-downloaded when needed.",
            "1-5GB",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "Xcode Previews",
            "~/Library/Developer/Xcode/Previews",
            "SwiftUI Preview cache files. Safe to delete - Xcode will regenerate them.",
            "500MB-2GB",
            SafetyTier::Safe,
            true,
        ),
        directory(
            "System Caches",
            "~/Library/Caches/com.apple.dt.Xcode",
            "Various Xcode-related system caches. Advanced option.",
            "1-3GB",
            SafetyTier::Advanced,
            false,
        ),
    ]
}

/// Validate a registry before any prompt or deletion runs.
///
/// Enforces the two structural invariants: unique names and non-empty
/// locators.
pub fn validate(targets: &[CleanupTarget]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();

    for target in targets {
        if target.name.trim().is_empty() {
            return Err(SweepError::Registry("target with empty name".to_string()));
        }
        if !seen.insert(target.name.as_str()) {
            return Err(SweepError::Registry(format!(
                "duplicate target name '{}'",
                target.name
            )));
        }
        if target.locator().trim().is_empty() {
            return Err(SweepError::Registry(format!(
                "empty locator for '{}'",
                target.name
            )));
        }
    }

    Ok(())
}
