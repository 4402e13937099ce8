use std::io::{self, Write};

/// Names every line a header report can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    System,
    Copyright,
    DomesticName,
    OverseasName,
    ProductType,
    ProductCode,
    Checksum,
    Controllers,
    RomStart,
    RomEnd,
    RamStart,
    RamEnd,
    SramFlags,
    SramStart,
    SramEnd,
    Modem,
    ModemFirm,
    ModemVersion,
    Memo,
    Countries,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        use FieldId::*;
        match self {
            System       => "system",
            Copyright    => "copyright",
            DomesticName => "name (domestic)",
            OverseasName => "name (overseas)",
            ProductType  => "type",
            ProductCode  => "product code",
            Checksum     => "checksum",
            Controllers  => "controller flags",
            RomStart     => "rom start address",
            RomEnd       => "rom end address",
            RamStart     => "ram start address",
            RamEnd       => "ram end address",
            SramFlags    => "sram flags",
            SramStart    => "sram start address",
            SramEnd      => "sram end address",
            Modem        => "modem",
            ModemFirm    => "modem firm",
            ModemVersion => "modem version",
            Memo         => "memo(?)",
            Countries    => "countries",
        }
    }
}

/// A decoded header line.
///
/// The value is kept as bytes: header text is not guaranteed to be UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id:    FieldId,
    pub value: Vec<u8>,
}

impl Field {
    pub fn new(id: FieldId, value: Vec<u8>) -> Self {
        Self { id, value }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }
}

const LABEL_WIDTH: usize = 20;

/// Write one source's fields as left-aligned "label: value" lines,
/// followed by a blank separator line.
pub fn write_report<W: Write>(out: &mut W, fields: &[Field]) -> io::Result<()> {
    for field in fields {
        write!(out, "{:<width$}: ", field.label(), width = LABEL_WIDTH)?;
        out.write_all(&field.value)?;
        writeln!(out)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let fields = vec![
            Field::new(FieldId::ProductType, b"game".to_vec()),
            Field::new(FieldId::Memo, b"  \xFF ".to_vec()),
        ];
        let mut out = Vec::new();
        write_report(&mut out, &fields).unwrap();
        assert_eq!(out, b"type                : game\nmemo(?)             :   \xFF \n\n");
    }

    #[test]
    fn long_labels_are_not_cut() {
        let mut out = Vec::new();
        write_report(&mut out, &[Field::new(FieldId::SramStart, b"0x0".to_vec())]).unwrap();
        assert_eq!(out, b"sram start address  : 0x0\n\n");
    }
}
