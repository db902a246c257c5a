//! Modifier bitmasks as reported by `hyprctl binds`, and the fixed set of modifier combinations
//! the settings panel can bind.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Modifier bitmask in the `modmask` field of a binding.
    ///
    /// The bit values follow the X11 modifier masks, which Hyprland reuses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModMask : u32 {
        /// Shift.
        const SHIFT = 1;
        /// Caps Lock.
        const CAPS = 1 << 1;
        /// Control.
        const CTRL = 1 << 2;
        /// Alt (Mod1).
        const ALT = 1 << 3;
        /// Mod2, usually Num Lock.
        const MOD2 = 1 << 4;
        /// Mod3.
        const MOD3 = 1 << 5;
        /// Super (Mod4).
        const SUPER = 1 << 6;
        /// Mod5.
        const MOD5 = 1 << 7;
    }
}

/// Modifier combination selectable for the layout switch binding.
///
/// Variants are listed in the order they are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierCombo {
    /// `SUPER`.
    Super,
    /// `ALT`.
    Alt,
    /// `CTRL`.
    Ctrl,
    /// `SHIFT`.
    Shift,
    /// `SUPER_SHIFT`.
    SuperShift,
    /// `ALT_SHIFT`.
    AltShift,
    /// `CTRL_ALT`.
    CtrlAlt,
    /// `SUPER_ALT`.
    SuperAlt,
}

impl ModifierCombo {
    /// All combinations, in display order.
    pub const ALL: [Self; 8] = [
        Self::Super,
        Self::Alt,
        Self::Ctrl,
        Self::Shift,
        Self::SuperShift,
        Self::AltShift,
        Self::CtrlAlt,
        Self::SuperAlt,
    ];

    /// Combination at `index` in display order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|combo| *combo == self)
            .unwrap_or_default()
    }

    /// Name used in `bind` and `unbind` keywords.
    pub fn name(self) -> &'static str {
        match self {
            Self::Super => "SUPER",
            Self::Alt => "ALT",
            Self::Ctrl => "CTRL",
            Self::Shift => "SHIFT",
            Self::SuperShift => "SUPER_SHIFT",
            Self::AltShift => "ALT_SHIFT",
            Self::CtrlAlt => "CTRL_ALT",
            Self::SuperAlt => "SUPER_ALT",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Super => "Super",
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
            Self::SuperShift => "Super+Shift",
            Self::AltShift => "Alt+Shift",
            Self::CtrlAlt => "Ctrl+Alt",
            Self::SuperAlt => "Super+Alt",
        }
    }

    /// Bitmask Hyprland reports for bindings using this combination.
    pub fn mask(self) -> ModMask {
        match self {
            Self::Super => ModMask::SUPER,
            Self::Alt => ModMask::ALT,
            Self::Ctrl => ModMask::CTRL,
            Self::Shift => ModMask::SHIFT,
            Self::SuperShift => ModMask::SUPER | ModMask::SHIFT,
            Self::AltShift => ModMask::ALT | ModMask::SHIFT,
            Self::CtrlAlt => ModMask::CTRL | ModMask::ALT,
            Self::SuperAlt => ModMask::SUPER | ModMask::ALT,
        }
    }

    /// Combination whose bitmask is exactly `modmask`.
    ///
    /// Masks with any other set of bits, including unknown bits and extra lock modifiers, have no
    /// combination.
    pub fn from_modmask(modmask: u32) -> Option<Self> {
        let mask = ModMask::from_bits(modmask)?;
        Self::ALL.into_iter().find(|combo| combo.mask() == mask)
    }
}

impl fmt::Display for ModifierCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifierCombo {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|combo| combo.name().eq_ignore_ascii_case(s))
            .ok_or("invalid modifier, can be SUPER, ALT, CTRL, SHIFT, SUPER_SHIFT, ALT_SHIFT, CTRL_ALT or SUPER_ALT")
    }
}
