// Copyright 2024 Irreducible Inc.
use gost_hash::{hash, Context, Digest, DigestSize, Error, Streebog256, Streebog512, StreebogDigest};
use hex_literal::hex;

// GOST R 34.11-2012, example 1
const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";
// GOST R 34.11-2012, example 2 ("Се ветри, Стрибожи внуци, ..." in CP1251)
const M2: [u8; 72] = hex!(
	"d1e520e2e5f2f0e82c20d1f2f0e8e1eee6e820e2edf3f6e82c20e2e5fef2fa20f120eceef0ff20f1"
	"f2f0e5ebe0ece820ede020f5f0e0e1f0fbff20efebfaeafb20c8e3eef0e5e2fb"
);

fn digest_256(data: &[u8]) -> [u8; 32] {
	Streebog256::digest(data).into()
}

fn digest_512(data: &[u8]) -> [u8; 64] {
	let mut out = [0u8; 64];
	out.copy_from_slice(&Streebog512::digest(data));
	out
}

#[test]
fn test_empty_input() {
	let expected = hex!("3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb");
	let out: [u8; 32] = Streebog256::default().finalize().into();
	assert_eq!(out, expected);
	assert_eq!(hash(DigestSize::Bits256, &[]).as_bytes(), &expected);

	let expected = hex!(
		"8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7"
		"362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a"
	);
	assert_eq!(digest_512(&[]), expected);

	let mut ctx = Context::new();
	ctx.initialize(512).unwrap();
	assert_eq!(ctx.finalize().unwrap().as_bytes(), &expected);
}

#[test]
fn test_standard_example_1() {
	assert_eq!(
		digest_256(M1),
		hex!("9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500")
	);
	assert_eq!(
		digest_512(M1),
		hex!(
			"1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa"
			"00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48"
		)
	);
}

#[test]
fn test_standard_example_2() {
	assert_eq!(
		digest_256(&M2),
		hex!("9dd2fe4e90409e5da87f53976d7405b0c0cac628fc669a741d50063c557e8f50")
	);
	assert_eq!(
		digest_512(&M2),
		hex!(
			"1e88e62226bfca6f9994f1f2d51569e0daf8475a3b0fe61a5300eee46d961376"
			"035fe83549ada2b8620fcd7c496ce5b33f0cb9dddc2b6460143b03dabac9fb28"
		)
	);
}

#[test]
fn test_multi_update() {
	// Testing breaking it out into chunks
	let mut hasher_1 = Streebog256::default();
	hasher_1.update("The quick brown fox jumps over the lazy dog".as_bytes());
	let expected = hex!("3e7dea7f2384b6c5a3d0e24aaa29c05e89ddd762145030ec22c71a6db8b2c1f4");
	let hash: [u8; 32] = hasher_1.finalize().into();
	assert_eq!(hash, expected);

	let mut hasher_2 = Streebog256::default();
	hasher_2.update("The quick brown fox jumps".as_bytes());
	hasher_2.update(" over the lazy dog".as_bytes());
	let hash: [u8; 32] = hasher_2.finalize().into();
	assert_eq!(expected, hash);
}

#[test]
fn test_one_chunk_input() {
	// Exactly 64 bytes: the padding goes into a block of its own
	let data = [b'a'; 64];
	assert_eq!(
		digest_256(&data),
		hex!("c2ce0969b6e468445ecfaed89f614178f89cc37ab59523528a58745007f33ab2")
	);
	assert_eq!(
		digest_512(&data),
		hex!(
			"613852076ca11156cf7d00f4feef0d5e3198e638f8e20eb02da2f5f7dca5b62d"
			"d9fb88e22e825f727ed6f25e4145dc868d0ef41e3e451e34b780e5547ade0d43"
		)
	);
}

#[test]
fn test_two_chunk_input() {
	let data = [b'a'; 65];
	assert_eq!(
		digest_256(&data),
		hex!("eed69dade400108a57e054f03dd694ab128207cefaae4c56159e13442e3f03f9")
	);
	assert_eq!(
		digest_512(&data),
		hex!(
			"42baf8f1711d47b6de63559743d09f5e11c9a348bea73b8bb3fe11be0ec0f602"
			"9856d70b936a00f7414b5f1ebd8e2bdaa74f3a893b90978da9cadcb72ae50338"
		)
	);
}

#[test]
fn test_aligned_block_updates() {
	// The first block arrives in pieces that only line up with 64 bytes in the last update
	let data: Vec<u8> = (0..=255u8).cycle().take(1024).collect();
	let expected = hex!("7a6682133082a49c37db7b008394aeb9c184d5fb2a8d2a6251dd4bba5f6744b4");

	let mut ctx = Context::new();
	ctx.initialize(256).unwrap();
	ctx.absorb(&data[..44]).unwrap();
	ctx.absorb(&data[44..63]).unwrap();
	ctx.absorb(&data[63..64]).unwrap();
	ctx.absorb(&data[64..]).unwrap();
	assert_eq!(ctx.finalize().unwrap().as_bytes(), &expected);

	let expected = hex!(
		"fc44df1ffe41f70a41915b90380d458bdc149302576208d4cadee7c694e5a169"
		"812a52ea2b746b9c2c4d3e0808eb723afadabf6f795e60c9367269a8d3f6fbf8"
	);
	assert_eq!(digest_512(&data), expected);
}

#[test]
fn test_multi_block_high_bytes() {
	// Σ accumulates carries across all lanes
	let data = [0xffu8; 200];
	assert_eq!(
		digest_256(&data),
		hex!("766ecebac5817150ace66c0c94c9feb9fa6ee9a238a500a3592b0943571b3020")
	);
	assert_eq!(
		digest_512(&data),
		hex!(
			"a32bc44c32d9f7fc60d133fbddd468fc49e43253bcce4d90befcdbe5d4899d46"
			"a54ca52f416ed90cd74c46a5e1d67932b5e8350370424e6918ab80a19ffc97c6"
		)
	);
}

#[test]
fn test_digest_lengths() {
	for len in [0usize, 1, 63, 64, 65, 127, 128, 4096] {
		let data = vec![0x42u8; len];
		for bits in [256, 512] {
			let mut ctx = Context::new();
			ctx.initialize(bits).unwrap();
			ctx.absorb(&data).unwrap();
			let digest = ctx.finalize().unwrap();
			assert_eq!(digest.as_bytes().len(), bits / 8);
			assert_eq!(digest.size().bits(), bits);
		}
	}
}

#[test]
fn test_checksum_line_form() {
	// Checksum files list the digest bytes in reverse order
	let digest = hash(DigestSize::Bits256, M1);
	let line = format!("{digest} -");
	assert_eq!(line, "00557be5e584fd52a449b16b0251d05d27f94ab76cbaa6da890b59d8ef1e159d -");

	let parsed: StreebogDigest = line[..64].parse().unwrap();
	assert_eq!(parsed, digest);

	let digest = hash(DigestSize::Bits512, &M2);
	assert_eq!(
		digest.to_string(),
		"28fbc9bada033b1460642bdcddb90c3fb3e56c497ccd0f62b8a2ad4935e85f03\
		 7613966de4ee00531ae60f3b5a47f8dae06915d5f2f194996fcabf2622e6881e"
	);
}

#[test]
fn test_reinitialized_context_has_no_leakage() {
	let mut ctx = Context::new();
	ctx.initialize(256).unwrap();
	ctx.absorb(&M2).unwrap();
	let first = ctx.finalize().unwrap();
	assert_eq!(
		ctx.absorb(M1),
		Err(Error::InvalidState {
			operation: "absorb",
			state: "finalized"
		})
	);

	ctx.initialize(256).unwrap();
	ctx.absorb(M1).unwrap();
	let second = ctx.finalize().unwrap();

	assert_ne!(first, second);
	assert_eq!(second, hash(DigestSize::Bits256, M1));
}
