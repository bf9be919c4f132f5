use byteorder::{BigEndian, WriteBytesExt};
use fan_fcode::{FAttrs, PodInput};

fn main() {
    pretty_env_logger::init();

    // hand-assemble the attr table a pod writer would emit for one slot:
    // a source file, a line number, and a record this decoder has never
    // heard of (run with RUST_LOG=warn to see the facets diagnostic)
    let names = vec![
        String::from("SourceFile"),
        String::from("LineNumber"),
        String::from("FacetsV2"),
    ];

    let mut buf = Vec::new();
    buf.write_u16::<BigEndian>(3).unwrap();

    buf.write_u16::<BigEndian>(0).unwrap(); // SourceFile
    buf.write_u16::<BigEndian>(2 + 8).unwrap();
    buf.write_u16::<BigEndian>(8).unwrap();
    buf.extend_from_slice(b"main.fan");

    buf.write_u16::<BigEndian>(1).unwrap(); // LineNumber
    buf.write_u16::<BigEndian>(2).unwrap();
    buf.write_u16::<BigEndian>(12).unwrap();

    buf.write_u16::<BigEndian>(2).unwrap(); // FacetsV2, skipped by length
    buf.write_u16::<BigEndian>(4).unwrap();
    buf.extend_from_slice(&[0xCA, 0xFE, 0x00, 0x01]);

    let mut input = PodInput::new(&buf, 0x0100_0046).with_names(names);
    let attrs = FAttrs::read(&mut input).unwrap();

    println!("{:#?}", attrs);
}
