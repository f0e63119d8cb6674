//! Pointer and keyboard access for X11-based systems.
//!
//! [`X11Pointer`] warps the pointer with core protocol requests and clicks
//! through the XTEST extension. [`X11Keyboard`] polls the server keymap for
//! the toggle and quit keys once per frame.

use crate::{
    capabilities::{KeySource, KeyState, PointerSink},
    error::{AppError, Result},
    utils::safe_cast::f64_to_i16_clamp,
};
use log::{debug, info, warn};
use x11rb::{
    connection::{Connection, RequestConnection},
    protocol::{
        xproto::{ConnectionExt as _, Keycode, Keysym, Screen, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT},
        xtest::{self, ConnectionExt as _},
    },
    rust_connection::RustConnection,
};

/// Primary mouse button
const LEFT_BUTTON: u8 = 1;

/// Cursor control implementation for X11
pub struct X11Pointer {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
    xtest_available: bool,
}

impl X11Pointer {
    /// Connect to the X server named by `$DISPLAY`
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        // Connect to X11 server
        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::X11(format!("Failed to connect to X11: {e}")))?;

        // Get screen information
        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::X11("Failed to get screen".to_string()))?
            .clone();

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        let xtest_available = connection
            .extension_information(xtest::X11_EXTENSION_NAME)
            .map_err(|e| AppError::X11(format!("Failed to query XTEST: {e}")))?
            .is_some();
        if !xtest_available {
            warn!("XTEST extension not available, pinch clicks will fail");
        }

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
            xtest_available,
        })
    }

    /// Set cursor position (absolute)
    pub fn set_position(&self, x: i16, y: i16) -> Result<()> {
        // Clamp to screen bounds safely
        let max_x = i16::try_from(self.screen_width.saturating_sub(1)).unwrap_or(i16::MAX);
        let max_y = i16::try_from(self.screen_height.saturating_sub(1)).unwrap_or(i16::MAX);
        let x = x.clamp(0, max_x);
        let y = y.clamp(0, max_y);

        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| AppError::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    /// Press and release the primary button at the current pointer position
    pub fn click_button(&self) -> Result<()> {
        if !self.xtest_available {
            return Err(AppError::CursorControl("XTEST extension not available".to_string()));
        }

        for event in [BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT] {
            self.connection
                .xtest_fake_input(event, LEFT_BUTTON, x11rb::CURRENT_TIME, self.screen.root, 0, 0, 0)
                .map_err(|e| AppError::CursorControl(format!("Failed to send fake button event: {e}")))?;
        }

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    /// Get screen dimensions
    pub const fn get_screen_size(&self) -> (u16, u16) {
        (self.screen_width, self.screen_height)
    }
}

impl PointerSink for X11Pointer {
    fn move_pointer_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.set_position(f64_to_i16_clamp(x), f64_to_i16_clamp(y))
    }

    fn click(&mut self) -> Result<()> {
        self.click_button()
    }
}

/// Keyboard polling through the X11 keymap
pub struct X11Keyboard {
    connection: RustConnection,
    toggle_keycodes: Vec<Keycode>,
    quit_keycodes: Vec<Keycode>,
}

impl X11Keyboard {
    /// Connect and resolve the toggle and quit key names to keycodes
    pub fn new(toggle_key: &str, quit_key: &str) -> Result<Self> {
        let toggle_keysyms = keysyms_from_name(toggle_key)?;
        let quit_keysyms = keysyms_from_name(quit_key)?;

        let (connection, _) = RustConnection::connect(None)
            .map_err(|e| AppError::X11(format!("Failed to connect to X11: {e}")))?;

        let toggle_keycodes = keycodes_for(&connection, &toggle_keysyms)?;
        let quit_keycodes = keycodes_for(&connection, &quit_keysyms)?;
        if toggle_keycodes.is_empty() {
            warn!("Toggle key {} is not on the current keyboard layout", toggle_key);
        }
        if quit_keycodes.is_empty() {
            warn!("Quit key {} is not on the current keyboard layout", quit_key);
        }

        info!(
            "Keyboard polling: toggle {} {:?}, quit {} {:?}",
            toggle_key, toggle_keycodes, quit_key, quit_keycodes
        );

        Ok(Self {
            connection,
            toggle_keycodes,
            quit_keycodes,
        })
    }
}

impl KeySource for X11Keyboard {
    fn poll(&mut self) -> Result<KeyState> {
        let keymap = self
            .connection
            .query_keymap()
            .map_err(|e| AppError::X11(format!("Failed to send query keymap: {e}")))?
            .reply()
            .map_err(|e| AppError::X11(format!("Failed to query keymap: {e}")))?
            .keys;

        Ok(KeyState {
            toggle_down: self.toggle_keycodes.iter().any(|&code| is_pressed(&keymap, code)),
            quit_down: self.quit_keycodes.iter().any(|&code| is_pressed(&keymap, code)),
        })
    }
}

/// Find every keycode whose mapping contains one of `keysyms`
fn keycodes_for(connection: &RustConnection, keysyms: &[Keysym]) -> Result<Vec<Keycode>> {
    let setup = connection.setup();
    let min_keycode = setup.min_keycode;
    let count = setup.max_keycode.saturating_sub(min_keycode).saturating_add(1);

    let mapping = connection
        .get_keyboard_mapping(min_keycode, count)
        .map_err(|e| AppError::X11(format!("Failed to send keyboard mapping request: {e}")))?
        .reply()
        .map_err(|e| AppError::X11(format!("Failed to get keyboard mapping: {e}")))?;

    let per_keycode = usize::from(mapping.keysyms_per_keycode).max(1);
    let keycodes = mapping
        .keysyms
        .chunks(per_keycode)
        .enumerate()
        .filter(|(_, syms)| syms.iter().any(|sym| keysyms.contains(sym)))
        .filter_map(|(offset, _)| u8::try_from(offset).ok().and_then(|o| min_keycode.checked_add(o)))
        .collect();

    Ok(keycodes)
}

/// Test a keycode's bit in a `QueryKeymap` reply
fn is_pressed(keymap: &[u8; 32], keycode: Keycode) -> bool {
    let byte = usize::from(keycode / 8);
    keymap[byte] & (1 << (keycode % 8)) != 0
}

/// Resolve a key name to every keysym it stands for.
///
/// `Shift`, `Control`, `Alt` and `Super` match both the left and right key;
/// any other name resolves through [`keysym_from_name`].
pub fn keysyms_from_name(name: &str) -> Result<Vec<Keysym>> {
    let sides = match name {
        "Shift" => ["Shift_L", "Shift_R"],
        "Control" => ["Control_L", "Control_R"],
        "Alt" => ["Alt_L", "Alt_R"],
        "Super" => ["Super_L", "Super_R"],
        _ => return Ok(vec![keysym_from_name(name)?]),
    };
    sides.iter().map(|side| keysym_from_name(side)).collect()
}

/// Resolve an X11 keysym name.
///
/// Covers the modifier and control keys that make sense as toggles plus any
/// single printable ASCII character (letters are matched lowercase).
pub fn keysym_from_name(name: &str) -> Result<Keysym> {
    let keysym = match name {
        "Shift_L" => 0xffe1,
        "Shift_R" => 0xffe2,
        "Control_L" => 0xffe3,
        "Control_R" => 0xffe4,
        "Caps_Lock" => 0xffe5,
        "Alt_L" => 0xffe9,
        "Alt_R" => 0xffea,
        "Super_L" => 0xffeb,
        "Super_R" => 0xffec,
        "Escape" => 0xff1b,
        "Pause" => 0xff13,
        "Scroll_Lock" => 0xff14,
        "Tab" => 0xff09,
        "Return" => 0xff0d,
        "space" => 0x0020,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_graphic() => u32::from(c.to_ascii_lowercase()),
                _ => return Err(AppError::InvalidInput(format!("Unknown key name: {name}"))),
            }
        }
    };

    Ok(keysym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires X11 display
    fn test_pointer_reports_screen_size() {
        let pointer = X11Pointer::new().unwrap();
        let (width, height) = pointer.get_screen_size();
        assert!(width > 0 && height > 0);
    }

    #[test]
    fn test_generic_modifiers_match_both_sides() {
        assert_eq!(keysyms_from_name("Shift").unwrap(), vec![0xffe1, 0xffe2]);
        assert_eq!(keysyms_from_name("Control").unwrap(), vec![0xffe3, 0xffe4]);
        assert_eq!(keysyms_from_name("Shift_R").unwrap(), vec![0xffe2]);
        assert_eq!(keysyms_from_name("Pause").unwrap(), vec![0xff13]);
        assert!(keysyms_from_name("Meta").is_err());
    }

    #[test]
    fn test_default_keys_resolve() {
        use crate::constants::{DEFAULT_QUIT_KEY, DEFAULT_TOGGLE_KEY};

        assert_eq!(keysyms_from_name(DEFAULT_TOGGLE_KEY).unwrap().len(), 2);
        // Quit key is not a printable character
        let quit = keysyms_from_name(DEFAULT_QUIT_KEY).unwrap();
        assert!(quit.iter().all(|&sym| sym > 0xff00));
    }

    #[test]
    fn test_keysym_names() {
        assert_eq!(keysym_from_name("Shift_L").unwrap(), 0xffe1);
        assert_eq!(keysym_from_name("q").unwrap(), 0x71);
        assert_eq!(keysym_from_name("Q").unwrap(), 0x71);
        assert_eq!(keysym_from_name("7").unwrap(), 0x37);
        assert!(keysym_from_name("Hyper_Q").is_err());
        assert!(keysym_from_name("").is_err());
    }

    #[test]
    fn test_is_pressed_bit_layout() {
        let mut keymap = [0u8; 32];
        // Keycode 50 is Shift_L on most PC layouts: byte 6, bit 2
        keymap[6] = 0b0000_0100;
        assert!(is_pressed(&keymap, 50));
        assert!(!is_pressed(&keymap, 49));
        assert!(!is_pressed(&keymap, 24));

        keymap[31] = 0b1000_0000;
        assert!(is_pressed(&keymap, 255));
    }
}
