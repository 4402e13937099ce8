use bitflags::bitflags;

use crate::bytes;
use crate::layout::{self, FieldSpec};

/// Bytes taken from the start of the ROM image.
/// The cartridge header proper occupies the upper half.
pub const HEADER_SIZE: usize = 0x200;

/// Software category stored at 0x180.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductType {
    Game,
    Education,
    Unknown([u8; 2]),
}

impl ProductType {
    pub fn from_code(code: &[u8; 2]) -> Self {
        match code {
            b"GM" => ProductType::Game,
            b"Al" => ProductType::Education,
            _ => ProductType::Unknown(*code),
        }
    }
}

/// Input peripheral advertised in the I/O support field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peripheral {
    SmsJoypad,
    TeamPlay,
    SixButtonJoypad,
    Joypad,
    Keyboard,
    Serial,
    Printer,
    Tablet,
    ControlBall,
    Paddle,
    FloppyDrive,
    CdRom,
    MegaMouse,
    Activator,
}

impl Peripheral {
    pub fn from_code(code: u8) -> Option<Self> {
        use Peripheral::*;
        match code {
            b'0' => Some(SmsJoypad),
            b'4' => Some(TeamPlay),
            b'6' => Some(SixButtonJoypad),
            b'J' => Some(Joypad),
            b'K' => Some(Keyboard),
            b'R' => Some(Serial),
            b'P' => Some(Printer),
            b'T' => Some(Tablet),
            b'B' => Some(ControlBall),
            b'V' => Some(Paddle),
            b'F' => Some(FloppyDrive),
            b'C' => Some(CdRom),
            b'M' => Some(MegaMouse),
            b'L' => Some(Activator),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        use Peripheral::*;
        match self {
            SmsJoypad       => "sms_joypad",
            TeamPlay        => "team_play",
            SixButtonJoypad => "6_button_joypad",
            Joypad          => "joypad",
            Keyboard        => "keyboard",
            Serial          => "serial(rs232c)",
            Printer         => "printer",
            Tablet          => "tablet",
            ControlBall     => "control_ball",
            Paddle          => "paddle",
            FloppyDrive     => "fdd",
            CdRom           => "cd-rom",
            MegaMouse       => "mega_mouse",
            Activator       => "activator",
        }
    }
}

/// One non-blank byte of the I/O support field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerFlag {
    Known(Peripheral),
    Unknown(u8),
}

/// Decode the I/O support field in scan order.
/// Spaces and NULs are padding. Duplicates are kept.
pub fn controller_flags(codes: &[u8]) -> Vec<ControllerFlag> {
    codes.iter()
        .filter(|code| !matches!(**code, b' ' | 0))
        .map(|&code| match Peripheral::from_code(code) {
            Some(peripheral) => ControllerFlag::Known(peripheral),
            None => ControllerFlag::Unknown(code),
        })
        .collect()
}

/// Release region advertised in the country field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Europe,
    Japan,
    Usa,
    Asia,
    Brazil,
    France,
    HongKong,
}

impl Region {
    pub fn from_code(code: u8) -> Option<Self> {
        use Region::*;
        match code {
            b'E' => Some(Europe),
            b'J' => Some(Japan),
            b'U' => Some(Usa),
            b'A' => Some(Asia),
            b'B' | b'4' => Some(Brazil),
            b'F' => Some(France),
            b'8' => Some(HongKong),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        use Region::*;
        match self {
            Europe   => "europe",
            Japan    => "japan",
            Usa      => "usa",
            Asia     => "asia",
            Brazil   => "brazil",
            France   => "france",
            HongKong => "hong-kong",
        }
    }
}

/// Decode the country field in scan order. Unrecognised bytes are dropped.
pub fn regions(codes: &[u8]) -> Vec<Region> {
    codes.iter()
        .filter_map(|&code| Region::from_code(code))
        .collect()
}

bitflags! {
    /// Flag byte following the "RA" SRAM marker.
    pub struct SramFlags: u8 {
        const TYPE_HI   = 0x80;
        const TYPE_LO   = 0x20;
        const LAYOUT    = 0x18;
    }
}

/// Which addresses the save RAM responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SramLayout {
    EvenAndOdd,
    /// Layout bits 01. No known cartridge uses this.
    Reserved,
    EvenOnly,
    OddOnly,
}

impl SramLayout {
    fn from_flags(flags: SramFlags) -> Self {
        match (flags & SramFlags::LAYOUT).bits() >> 3 {
            0 => SramLayout::EvenAndOdd,
            1 => SramLayout::Reserved,
            2 => SramLayout::EvenOnly,
            _ => SramLayout::OddOnly,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SramLayout::EvenAndOdd => "even_and_odd_adr",
            SramLayout::Reserved   => "reserved",
            SramLayout::EvenOnly   => "even_adr_only",
            SramLayout::OddOnly    => "odd_adr_only",
        }
    }
}

/// Check the 4-byte SRAM marker ("RA", flags, 0x20) and extract the layout.
pub fn sram_layout(marker: &[u8; 4]) -> Option<SramLayout> {
    if &marker[0..2] != b"RA" || marker[3] != 0x20 {
        return None;
    }
    let flags = SramFlags::from_bits_truncate(marker[2]);
    if !flags.intersects(SramFlags::TYPE_HI | SramFlags::TYPE_LO) {
        return None;
    }
    Some(SramLayout::from_flags(flags))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SramInfo {
    Absent,
    Present {
        layout: SramLayout,
        start: u32,
        end: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModemInfo {
    Absent,
    Present {
        firm: [u8; 4],
        version: [u8; 4],
    },
}

impl ModemInfo {
    /// Parse the 10-byte modem block: "MO", firm, version.
    pub fn parse(block: &[u8; 10]) -> Self {
        if &block[0..2] != b"MO" {
            return ModemInfo::Absent;
        }
        let mut firm = [0; 4];
        let mut version = [0; 4];
        firm.copy_from_slice(&block[2..6]);
        version.copy_from_slice(&block[6..10]);
        ModemInfo::Present { firm, version }
    }
}

/// Typed view over the first 0x200 bytes of a ROM image.
///
/// Text accessors hand back the raw bytes, padding included.
pub struct RomHeader<'a> {
    data: &'a [u8; HEADER_SIZE],
}

impl<'a> RomHeader<'a> {
    pub fn new(data: &'a [u8; HEADER_SIZE]) -> Self {
        Self { data }
    }

    fn field(&self, spec: &FieldSpec) -> &'a [u8] {
        spec.bytes(self.data)
    }

    fn array<const N: usize>(&self, spec: &FieldSpec) -> [u8; N] {
        bytes::array(self.data, spec.offset)
    }

    fn word(&self, spec: &FieldSpec) -> u32 {
        bytes::be_u32(self.data, spec.offset)
    }

    /// Console name, normally "SEGA MEGA DRIVE " or "SEGA GENESIS    ".
    pub fn system_name(&self) -> &'a [u8] {
        self.field(&layout::SYSTEM)
    }

    pub fn copyright(&self) -> &'a [u8] {
        self.field(&layout::COPYRIGHT)
    }

    pub fn domestic_name(&self) -> &'a [u8] {
        self.field(&layout::DOMESTIC_NAME)
    }

    pub fn overseas_name(&self) -> &'a [u8] {
        self.field(&layout::OVERSEAS_NAME)
    }

    pub fn product_type(&self) -> ProductType {
        ProductType::from_code(&self.array(&layout::PRODUCT_TYPE))
    }

    pub fn product_code(&self) -> &'a [u8] {
        self.field(&layout::PRODUCT_CODE)
    }

    /// Checksum as written by the developer. Not verified.
    pub fn checksum(&self) -> u16 {
        bytes::hi(self.word(&layout::CHECKSUM))
    }

    pub fn controller_flags(&self) -> Vec<ControllerFlag> {
        controller_flags(self.field(&layout::CONTROLLERS))
    }

    /// ROM start and end addresses.
    pub fn rom_range(&self) -> (u32, u32) {
        (self.word(&layout::ROM_START), self.word(&layout::ROM_END))
    }

    /// Work RAM start and end addresses.
    pub fn ram_range(&self) -> (u32, u32) {
        (self.word(&layout::RAM_START), self.word(&layout::RAM_END))
    }

    pub fn sram(&self) -> SramInfo {
        match sram_layout(&self.array(&layout::SRAM)) {
            Some(kind) => SramInfo::Present {
                layout: kind,
                start: self.word(&layout::SRAM_START),
                end: self.word(&layout::SRAM_END),
            },
            None => SramInfo::Absent,
        }
    }

    pub fn modem(&self) -> ModemInfo {
        ModemInfo::parse(&self.array(&layout::MODEM))
    }

    pub fn memo(&self) -> &'a [u8] {
        self.field(&layout::MEMO)
    }

    pub fn countries(&self) -> Vec<Region> {
        regions(self.field(&layout::COUNTRIES))
    }
}
