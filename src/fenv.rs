/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::MathError;
use bitflags::bitflags;
use std::cell::Cell;

/// IEEE-754 rounding direction applied to the final result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to even
    #[default]
    Nearest,
    /// Round toward zero
    TowardZero,
    /// Round toward positive infinity
    Upward,
    /// Round toward negative infinity
    Downward,
}

impl RoundingMode {
    /// All four directions, in the order test drivers iterate them.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Nearest,
        RoundingMode::TowardZero,
        RoundingMode::Upward,
        RoundingMode::Downward,
    ];
}

bitflags! {
    /// Sticky IEEE-754 exception flags.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct FpExceptions: u8 {
        const INVALID = 1;
        const DIVIDE_BY_ZERO = 1 << 1;
        const OVERFLOW = 1 << 2;
        const UNDERFLOW = 1 << 3;
        const INEXACT = 1 << 4;
    }
}

struct FpEnv {
    mode: Cell<RoundingMode>,
    flags: Cell<FpExceptions>,
    error: Cell<Option<MathError>>,
}

thread_local! {
    static ENV: FpEnv = const {
        FpEnv {
            mode: Cell::new(RoundingMode::Nearest),
            flags: Cell::new(FpExceptions::empty()),
            error: Cell::new(None),
        }
    };
}

/// Rounding direction of the calling thread.
#[inline]
pub fn rounding_mode() -> RoundingMode {
    ENV.with(|env| env.mode.get())
}

/// Sets the rounding direction of the calling thread, returns the previous one.
#[inline]
pub fn set_rounding_mode(mode: RoundingMode) -> RoundingMode {
    ENV.with(|env| env.mode.replace(mode))
}

struct ModeGuard(RoundingMode);

impl Drop for ModeGuard {
    fn drop(&mut self) {
        set_rounding_mode(self.0);
    }
}

/// Runs `f` with the given rounding direction, then restores the previous one.
pub fn with_rounding_mode<R>(mode: RoundingMode, f: impl FnOnce() -> R) -> R {
    let _guard = ModeGuard(set_rounding_mode(mode));
    f()
}

/// Exception flags raised on this thread since they were last cleared.
#[inline]
pub fn test_exceptions() -> FpExceptions {
    ENV.with(|env| env.flags.get())
}

/// Clears all exception flags of the calling thread.
#[inline]
pub fn clear_exceptions() {
    ENV.with(|env| env.flags.set(FpExceptions::empty()));
}

/// Returns the raised exception flags and clears them.
#[inline]
pub fn take_exceptions() -> FpExceptions {
    ENV.with(|env| env.flags.replace(FpExceptions::empty()))
}

/// Returns the last recorded mathematical error and resets it.
#[inline]
pub fn take_math_error() -> Option<MathError> {
    ENV.with(|env| env.error.take())
}

#[inline]
pub(crate) fn raise(flags: FpExceptions) {
    if flags.is_empty() {
        return;
    }
    ENV.with(|env| env.flags.set(env.flags.get() | flags));
}

#[inline]
pub(crate) fn signal(error: MathError, flags: FpExceptions) {
    ENV.with(|env| {
        env.error.set(Some(error));
        env.flags.set(env.flags.get() | flags);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_restored() {
        assert_eq!(rounding_mode(), RoundingMode::Nearest);
        let inner = with_rounding_mode(RoundingMode::Upward, rounding_mode);
        assert_eq!(inner, RoundingMode::Upward);
        assert_eq!(rounding_mode(), RoundingMode::Nearest);
    }

    #[test]
    fn mode_is_restored_on_panic() {
        let r = std::panic::catch_unwind(|| {
            with_rounding_mode(RoundingMode::Downward, || panic!("boom"));
        });
        assert!(r.is_err());
        assert_eq!(rounding_mode(), RoundingMode::Nearest);
    }

    #[test]
    fn flags_are_sticky() {
        clear_exceptions();
        raise(FpExceptions::INEXACT);
        raise(FpExceptions::OVERFLOW);
        assert_eq!(
            test_exceptions(),
            FpExceptions::INEXACT | FpExceptions::OVERFLOW
        );
        assert_eq!(
            take_exceptions(),
            FpExceptions::INEXACT | FpExceptions::OVERFLOW
        );
        assert!(test_exceptions().is_empty());
    }

    #[test]
    fn error_is_taken_once() {
        signal(MathError::Domain, FpExceptions::INVALID);
        assert_eq!(take_math_error(), Some(MathError::Domain));
        assert_eq!(take_math_error(), None);
        assert!(take_exceptions().contains(FpExceptions::INVALID));
    }

    #[test]
    fn environment_is_per_thread() {
        set_rounding_mode(RoundingMode::TowardZero);
        let other = std::thread::spawn(rounding_mode).join().unwrap();
        assert_eq!(other, RoundingMode::Nearest);
        set_rounding_mode(RoundingMode::Nearest);
    }
}
