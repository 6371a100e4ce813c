/*!
Fixed-capacity signed big integer arithmetic for RSA and primality testing.

> Note that `bignum` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must
> depend on `bignum`, we recommend pinning to a specific version, i.e.,
> `=0.y.z`.

The core type is [`BigInt`], a two's-complement integer over a fixed number
of 32-bit limbs chosen at compile time ([`I1024`], [`I2048`], ... are ready
instantiations). On top of the arithmetic sit Barrett-reduced modular
exponentiation, the classic probabilistic primality tests (Fermat,
Rabin-Miller, Solovay-Strassen, strong Lucas), structured prime searches,
and RSA key material assembly with CRT-accelerated private operations.

Overflow past the capacity is always an observable failure, never a silent
truncation: the `checked_*` methods return [`Error::Overflow`] and the
operator forms panic with the same message. Randomized routines take any
[`rand::RngCore`] implementation as an explicit parameter, so callers decide
how strong their randomness needs to be.

## Example

```
use bignum::{BigInt, I256};

let p: I256 = BigInt::from(61u32);
let q = BigInt::from(53u32);
let n = p * q;

assert!(p.is_bpsw_probable_prime());
assert!(!n.is_bpsw_probable_prime());

let e = BigInt::from(17u32);
assert_eq!(I256::from(65u32).mod_pow(&e, &n).unwrap(), BigInt::from(2790u32));
```
*/

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
pub mod bigint;
pub use bigint::{BigInt, I1024, I128, I2048, I256, I4096, I512, I64, I8192};
pub mod bits;
pub mod error;
pub use error::{Error, Result};
pub mod generate;
pub use generate::{gen_strong_prime, is_strong_prime, Direction, StrongPrime};
pub mod limb;
mod modular;
pub mod primality;
pub use primality::{jacobi, lucas_sequence, LucasTriple, PRIMES_BELOW_2000};
pub mod rsa;
pub use rsa::RsaKeyMaterial;
