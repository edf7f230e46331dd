//! Known CMSIS-DAP debug tools and their default report sizes.
//!
//! The report size is negotiated once at connection setup by looking up the
//! USB product ID; it is never consulted per call.

use tracing::debug;

// 3G tools
pub const PID_JTAGICE3: u16 = 0x2140;
pub const PID_ATMELICE: u16 = 0x2141;
pub const PID_POWERDEBUGGER: u16 = 0x2144;
pub const PID_EDBG_A: u16 = 0x2111;
pub const PID_ZERO: u16 = 0x2157;
pub const PID_MASS_STORAGE: u16 = 0x2169;
pub const PID_PUBLIC_EDBG_C: u16 = 0x216A;
pub const PID_KRAKEN: u16 = 0x2170;

// 4G tools
pub const PID_MEDBG: u16 = 0x2145;

// 5G tools
pub const PID_NEDBG_HID: u16 = 0x2172;
pub const PID_NEDBG_HID_CDC: u16 = 0x216F;
pub const PID_NEDBG_HID_MSD_CDC: u16 = 0x2173;
pub const PID_NEDBG_HID_DGI_CDC: u16 = 0x2174;
pub const PID_NEDBG_HID_MSD_DGI_CDC: u16 = 0x2175;

pub const PID_PICKIT4_HID: u16 = 0x2176;
pub const PID_PICKIT4_HID_CDC: u16 = 0x2177;

/// Default endpoint report sizes for tools known to use more than the
/// 64-byte HID baseline.
const REPORT_SIZES: &[(u16, usize)] = &[
    // 3G
    (PID_JTAGICE3, 512),
    (PID_ATMELICE, 512),
    (PID_POWERDEBUGGER, 512),
    (PID_EDBG_A, 512),
    // 4G
    (PID_MEDBG, 64),
    // 5G
    (PID_NEDBG_HID_MSD_DGI_CDC, 64),
    (PID_PICKIT4_HID, 64),
    (PID_PICKIT4_HID_CDC, 64),
];

/// Returns the default report size for a tool product ID.
///
/// Unknown product IDs fall back to 64 bytes.
pub fn default_report_size(pid: u16) -> usize {
    debug!(pid = format_args!("0x{pid:04X}"), "looking up report size");
    for &(known_pid, size) in REPORT_SIZES {
        if known_pid == pid {
            debug!(size, "default report size found");
            return size;
        }
    }
    debug!("product ID not found, falling back to 64 bytes");
    64
}
