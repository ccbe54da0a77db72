use dsa_hmac::security::{
    encode_u64, hmac_sha512, recover_private_key, seeded_rng, sign_exposing_nonce, verify,
    DsaKeyGenConfig, DsaKeyPair, DsaParams,
};
use num_bigint::BigUint;
use std::sync::Arc;

fn main() -> dsa_hmac::Result<()> {
    hmac_scenario()?;
    nonce_reuse_scenario()?;
    toy_group_scenario()?;
    Ok(())
}

fn hmac_scenario() -> dsa_hmac::Result<()> {
    println!("== HMAC-SHA-512");
    let key = "This is my super secret HMAC-SHA-512 key";
    let message = "I am using this input string to test my own implementation of HMAC-SHA-512";
    println!("key     = {:?}", key);
    println!("message = {:?}", message);

    let tag = hmac_sha512(key.as_bytes(), message.as_bytes())?;
    println!("hmac    = {}", hex::encode(tag));
    println!();
    Ok(())
}

fn nonce_reuse_scenario() -> dsa_hmac::Result<()> {
    println!("== DSA nonce reuse (1024-bit p, 160-bit q)");
    let params = Arc::new(DsaParams::nist_1024_160());
    let kp = DsaKeyPair::generate_with_config(params.clone(), &DsaKeyGenConfig { seed: Some(0) })?;
    println!("y  = {:x}", kp.public_key().y());

    let mut rng = seeded_rng(Some(0));
    let m1 = encode_u64(582_346_829_057_612);
    let (k, sig1) = sign_exposing_nonce(&kp, &m1, None, &mut rng)?;
    let v1 = verify(kp.public_key(), &m1, &sig1)?;
    println!("m1 = 582346829057612");
    println!("   r = {}\n   s = {}\n   v = {} (valid: {})", sig1.r, sig1.s, v1, v1 == sig1.r);

    let m2 = encode_u64(8_061_474_912_583);
    let (_, sig2) = sign_exposing_nonce(&kp, &m2, Some(&k), &mut rng)?;
    let v2 = verify(kp.public_key(), &m2, &sig2)?;
    println!("m2 = 8061474912583, signed with the same k");
    println!("   r = {}\n   s = {}\n   v = {} (valid: {})", sig2.r, sig2.s, v2, v2 == sig2.r);

    let recovered = recover_private_key(&params, &m1, &sig1, &m2, &sig2)?;
    println!("recovered k = {}", recovered.k);
    println!("recovered x = {}", recovered.x);
    println!("matches signer's key: {}", &recovered.x == kp.private_scalar());
    println!();
    Ok(())
}

fn toy_group_scenario() -> dsa_hmac::Result<()> {
    println!("== Toy group discrete log");
    let params = Arc::new(DsaParams::toy());
    let y = BigUint::from(31_377u32);
    println!("(p, q, g) = ({}, {}, {}), y = {}", params.p(), params.q(), params.g(), y);

    let kp = DsaKeyPair::from_public_by_brute_force(params, &y)?;
    println!("x = {}", kp.private_scalar());

    let mut rng = seeded_rng(Some(0));
    let document = encode_u64(610);
    let (_, sig) = sign_exposing_nonce(&kp, &document, Some(&BigUint::from(1305u32)), &mut rng)?;
    let v = verify(kp.public_key(), &document, &sig)?;
    println!("D = 610, k = 1305");
    println!("   r = {}\n   s = {}\n   v = {} (valid: {})", sig.r, sig.s, v, v == sig.r);
    Ok(())
}
