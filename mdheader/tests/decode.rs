use mdheader::{decode, read_header, write_report, Field, FieldId, ReadMode, HEADER_SIZE};

/// A plausible header: space-padded text, one joypad, three regions.
fn sonic_like() -> [u8; HEADER_SIZE] {
    let mut block = [0; HEADER_SIZE];
    block[0x100..].fill(b' ');
    block[0x100..0x110].copy_from_slice(b"SEGA MEGA DRIVE ");
    block[0x110..0x120].copy_from_slice(b"(C)SEGA 1991.APR");
    block[0x120..0x130].copy_from_slice(b"SONIC THE      H");
    block[0x180..0x182].copy_from_slice(b"GM");
    block[0x183..0x18E].copy_from_slice(b"00001009-00");
    block[0x18E..0x190].copy_from_slice(&[0x26, 0x4A]);
    block[0x190] = b'J';
    block[0x1A0..0x1B0].copy_from_slice(&[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xFF, 0xFF,
        0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF,
    ]);
    block[0x1F0] = b'J';
    block[0x1F1] = b'U';
    block[0x1F2] = b'E';
    block
}

fn value(fields: &[Field], id: FieldId) -> &[u8] {
    &fields.iter()
        .find(|f| f.id == id)
        .unwrap_or_else(|| panic!("missing {:?}", id))
        .value
}

#[test]
fn field_count_is_fixed() {
    let block = sonic_like();
    assert_eq!(decode(&block).len(), 18);

    let mut block = sonic_like();
    block[0x1BC..0x1C6].copy_from_slice(b"MOSEGA1.00");
    assert_eq!(decode(&block).len(), 19);

    for fill in [0x00, 0x20, 0xFF] {
        assert_eq!(decode(&[fill; HEADER_SIZE]).len(), 18);
    }
}

#[test]
fn full_report() {
    let fields = decode(&sonic_like());
    let mut out = Vec::new();
    write_report(&mut out, &fields).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "system              : SEGA MEGA DRIVE ");
    assert_eq!(lines[4], "type                : game");
    assert_eq!(lines[5], "product code        : 00001009-00");
    assert_eq!(lines[6], "checksum            : 0x264a (9802)");
    assert_eq!(lines[7], "controller flags    : joypad ");
    assert_eq!(lines[8], "rom start address   : 0x0");
    assert_eq!(lines[9], "rom end address     : 0x7ffff");
    assert_eq!(lines[10], "ram start address   : 0xff0000");
    assert_eq!(lines[11], "ram end address     : 0xffffff");
    assert_eq!(lines[12], "sram flags          : no sram either incorrect info");
    assert_eq!(lines[13], "sram start address  : 0x20202020");
    assert_eq!(lines[15], "modem               : no modem either incorrect info");
    assert_eq!(lines[17], "countries           : japan usa europe ");
    assert_eq!(lines[18], "");
    assert!(text.ends_with("\n\n"));
}

#[test]
fn product_type() {
    let mut block = sonic_like();
    block[0x180..0x182].copy_from_slice(b"Al");
    assert_eq!(value(&decode(&block), FieldId::ProductType), b"education");

    block[0x180..0x182].copy_from_slice(b"XY");
    assert_eq!(value(&decode(&block), FieldId::ProductType), b"unknown (XY)");
}

#[test]
fn checksum_is_high_half_of_word() {
    let mut block = sonic_like();
    block[0x18E..0x192].copy_from_slice(&[0x00, 0x01, 0x23, 0x45]);
    assert_eq!(value(&decode(&block), FieldId::Checksum), b"0x1 (1)");
}

#[test]
fn controller_flags() {
    let mut block = sonic_like();
    block[0x190] = b'0';
    assert_eq!(value(&decode(&block), FieldId::Controllers), b"sms_joypad ");

    block[0x190..0x194].copy_from_slice(b"J6MZ");
    let flags = String::from_utf8(value(&decode(&block), FieldId::Controllers).to_vec()).unwrap();
    assert_eq!(flags, "joypad 6_button_joypad mega_mouse  Z(?)");
    assert!(flags.contains("Z(?)"));
}

#[test]
fn sram_block() {
    let mut block = sonic_like();
    block[0x1B0..0x1BC].copy_from_slice(&[
        b'R', b'A', 0xA0, 0x20,
        0x00, 0x20, 0x00, 0x00,
        0x00, 0x20, 0xFF, 0xFF,
    ]);
    let fields = decode(&block);
    assert_eq!(value(&fields, FieldId::SramFlags), b"even_and_odd_adr");
    assert_eq!(value(&fields, FieldId::SramStart), b"0x200000");
    assert_eq!(value(&fields, FieldId::SramEnd), b"0x20ffff");

    block[0x1B0..0x1B2].copy_from_slice(b"XX");
    let fields = decode(&block);
    assert_eq!(value(&fields, FieldId::SramFlags), b"no sram either incorrect info");
    // Addresses are reported regardless.
    assert_eq!(value(&fields, FieldId::SramStart), b"0x200000");
}

#[test]
fn modem_block() {
    let mut block = sonic_like();
    block[0x1BC..0x1C6].copy_from_slice(b"MOFIRMVER1");
    let fields = decode(&block);
    assert_eq!(value(&fields, FieldId::ModemFirm), b"FIRM");
    assert_eq!(value(&fields, FieldId::ModemVersion), b"VER1");
    assert!(fields.iter().all(|f| f.id != FieldId::Modem));

    block[0x1BC] = b'X';
    let fields = decode(&block);
    assert_eq!(value(&fields, FieldId::Modem), b"no modem either incorrect info");
    assert!(fields.iter().all(|f| f.id != FieldId::ModemFirm && f.id != FieldId::ModemVersion));
}

#[test]
fn countries() {
    let mut block = sonic_like();
    block[0x1F0..0x1F3].copy_from_slice(b"4?8");
    assert_eq!(value(&decode(&block), FieldId::Countries), b"brazil hong-kong ");
}

#[test]
fn decode_is_pure() {
    let block = sonic_like();
    let copy = block;
    assert_eq!(decode(&block), decode(&block));
    assert_eq!(block, copy);
}

#[test]
fn all_zero_header() {
    let fields = decode(&[0; HEADER_SIZE]);
    assert_eq!(value(&fields, FieldId::ProductType), b"unknown (\0\0)");
    assert_eq!(value(&fields, FieldId::Controllers), b"");
    assert_eq!(value(&fields, FieldId::Countries), b"");
    assert_eq!(value(&fields, FieldId::SramFlags), b"no sram either incorrect info");
    assert_eq!(value(&fields, FieldId::Modem), b"no modem either incorrect info");
    assert_eq!(value(&fields, FieldId::Checksum), b"0x0 (0)");
    assert_eq!(value(&fields, FieldId::Memo), &[0; 40][..]);
}

#[test]
fn short_rom_from_reader() {
    let rom = sonic_like();
    let block = read_header(&rom[..0x183], ReadMode::Lenient).unwrap();
    assert_eq!(block.len(), 0x183);

    let fields = decode(block.data());
    assert_eq!(value(&fields, FieldId::ProductType), b"game");
    assert_eq!(value(&fields, FieldId::ProductCode), &[0; 11][..]);

    assert!(read_header(&rom[..0x183], ReadMode::Strict).is_err());
}
