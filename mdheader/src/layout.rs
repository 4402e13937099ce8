//! Offsets, widths and decode rules of every header field.
//!
//! Offsets are relative to the start of the ROM image.

use crate::bytes;
use crate::header::{
    self, ControllerFlag, ModemInfo, ProductType, HEADER_SIZE,
};
use crate::report::{Field, FieldId};

const NO_SRAM: &[u8] = b"no sram either incorrect info";
const NO_MODEM: &[u8] = b"no modem either incorrect info";

/// How the bytes of a field turn into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeRule {
    /// Raw bytes, emitted verbatim.
    Text,
    ProductType,
    /// High half of the big-endian word at the field offset.
    Checksum,
    Controllers,
    /// Big-endian word as lowercase hex.
    Address,
    Sram,
    /// Yields two fields when the modem marker is present.
    Modem,
    Countries,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub id:     FieldId,
    pub offset: usize,
    pub width:  usize,
    pub rule:   DecodeRule,
}

impl FieldSpec {
    const fn new(id: FieldId, offset: usize, width: usize, rule: DecodeRule) -> Self {
        Self { id, offset, width, rule }
    }

    pub fn bytes<'a>(&self, block: &'a [u8]) -> &'a [u8] {
        &block[self.offset..(self.offset + self.width)]
    }

    /// Decode this field alone.
    pub fn decode(&self, block: &[u8; HEADER_SIZE]) -> Vec<Field> {
        let raw = self.bytes(block);
        let value = match self.rule {
            DecodeRule::Text => raw.to_vec(),
            DecodeRule::ProductType => render_product_type(ProductType::from_code(&bytes::array(block, self.offset))),
            DecodeRule::Checksum => {
                let checksum = bytes::hi(bytes::be_u32(block, self.offset));
                format!("0x{:x} ({})", checksum, checksum).into_bytes()
            },
            DecodeRule::Controllers => render_controllers(&header::controller_flags(raw)),
            DecodeRule::Address => format!("0x{:x}", bytes::be_u32(block, self.offset)).into_bytes(),
            DecodeRule::Sram => match header::sram_layout(&bytes::array(block, self.offset)) {
                Some(layout) => layout.tag().as_bytes().to_vec(),
                None => NO_SRAM.to_vec(),
            },
            DecodeRule::Modem => return match ModemInfo::parse(&bytes::array(block, self.offset)) {
                ModemInfo::Present { firm, version } => vec![
                    Field::new(FieldId::ModemFirm, firm.to_vec()),
                    Field::new(FieldId::ModemVersion, version.to_vec()),
                ],
                ModemInfo::Absent => vec![Field::new(self.id, NO_MODEM.to_vec())],
            },
            DecodeRule::Countries => {
                let mut value = Vec::new();
                for region in header::regions(raw) {
                    value.extend_from_slice(region.tag().as_bytes());
                    value.push(b' ');
                }
                value
            },
        };
        vec![Field::new(self.id, value)]
    }
}

pub const SYSTEM: FieldSpec         = FieldSpec::new(FieldId::System, 0x100, 0x10, DecodeRule::Text);
pub const COPYRIGHT: FieldSpec      = FieldSpec::new(FieldId::Copyright, 0x110, 0x10, DecodeRule::Text);
pub const DOMESTIC_NAME: FieldSpec  = FieldSpec::new(FieldId::DomesticName, 0x120, 0x30, DecodeRule::Text);
pub const OVERSEAS_NAME: FieldSpec  = FieldSpec::new(FieldId::OverseasName, 0x150, 0x30, DecodeRule::Text);
pub const PRODUCT_TYPE: FieldSpec   = FieldSpec::new(FieldId::ProductType, 0x180, 0x2, DecodeRule::ProductType);
pub const PRODUCT_CODE: FieldSpec   = FieldSpec::new(FieldId::ProductCode, 0x183, 0xB, DecodeRule::Text);
pub const CHECKSUM: FieldSpec       = FieldSpec::new(FieldId::Checksum, 0x18E, 0x2, DecodeRule::Checksum);
pub const CONTROLLERS: FieldSpec    = FieldSpec::new(FieldId::Controllers, 0x190, 0x10, DecodeRule::Controllers);
pub const ROM_START: FieldSpec      = FieldSpec::new(FieldId::RomStart, 0x1A0, 0x4, DecodeRule::Address);
pub const ROM_END: FieldSpec        = FieldSpec::new(FieldId::RomEnd, 0x1A4, 0x4, DecodeRule::Address);
pub const RAM_START: FieldSpec      = FieldSpec::new(FieldId::RamStart, 0x1A8, 0x4, DecodeRule::Address);
pub const RAM_END: FieldSpec        = FieldSpec::new(FieldId::RamEnd, 0x1AC, 0x4, DecodeRule::Address);
pub const SRAM: FieldSpec           = FieldSpec::new(FieldId::SramFlags, 0x1B0, 0x4, DecodeRule::Sram);
pub const SRAM_START: FieldSpec     = FieldSpec::new(FieldId::SramStart, 0x1B4, 0x4, DecodeRule::Address);
pub const SRAM_END: FieldSpec       = FieldSpec::new(FieldId::SramEnd, 0x1B8, 0x4, DecodeRule::Address);
pub const MODEM: FieldSpec          = FieldSpec::new(FieldId::Modem, 0x1BC, 0xA, DecodeRule::Modem);
pub const MEMO: FieldSpec           = FieldSpec::new(FieldId::Memo, 0x1C8, 0x28, DecodeRule::Text);
pub const COUNTRIES: FieldSpec      = FieldSpec::new(FieldId::Countries, 0x1F0, 0x10, DecodeRule::Countries);

/// Every field, in output order.
pub const FIELD_TABLE: [FieldSpec; 18] = [
    SYSTEM,
    COPYRIGHT,
    DOMESTIC_NAME,
    OVERSEAS_NAME,
    PRODUCT_TYPE,
    PRODUCT_CODE,
    CHECKSUM,
    CONTROLLERS,
    ROM_START,
    ROM_END,
    RAM_START,
    RAM_END,
    SRAM,
    SRAM_START,
    SRAM_END,
    MODEM,
    MEMO,
    COUNTRIES,
];

/// Decode a header block into labeled fields.
///
/// Every field has a fallback, so this cannot fail. Garbage in gives
/// well-formed garbage out.
pub fn decode(block: &[u8; HEADER_SIZE]) -> Vec<Field> {
    FIELD_TABLE.iter()
        .flat_map(|spec| spec.decode(block))
        .collect()
}

fn render_product_type(product_type: ProductType) -> Vec<u8> {
    match product_type {
        ProductType::Game => b"game".to_vec(),
        ProductType::Education => b"education".to_vec(),
        ProductType::Unknown(code) => {
            let mut value = b"unknown (".to_vec();
            value.extend_from_slice(&code);
            value.push(b')');
            value
        },
    }
}

fn render_controllers(flags: &[ControllerFlag]) -> Vec<u8> {
    let mut value = Vec::new();
    for flag in flags {
        match flag {
            ControllerFlag::Known(peripheral) => {
                value.extend_from_slice(peripheral.tag().as_bytes());
                value.push(b' ');
            },
            ControllerFlag::Unknown(code) => {
                value.push(b' ');
                value.push(*code);
                value.extend_from_slice(b"(?)");
            },
        }
    }
    value
}
