//! C ABI shim between a transport host's plugin loader and [`SampledSource`].
//!
//! The host resolves three symbols with `dlsym`:
//!
//! - `openmc_create_source(const char* parameters) -> void*`
//!   returns an owning handle, or null if the parameters were rejected,
//! - `openmc_sample_source(const void* handle, uint64_t* seed, Particle* out) -> int`
//!   writes one source site and returns [`STATUS_OK`] on success,
//! - `openmc_free_source(void* handle)` releases the handle.
//!
//! Only the generic functions below and the [`declare_source_plugin!`] macro
//! touch raw pointers. Everything they call is ordinary safe Rust.
//!
//! [`declare_source_plugin!`]: crate::declare_source_plugin

use std::ffi::{c_void, CStr};
use std::os::raw::{c_char, c_int};
use std::ptr;

use crate::error::{ConfigError, ConfigResult};
use crate::particle::ParticleRecord;
use crate::sampler::SampledSource;
use crate::source::{SourceFactory, SourceModel};

pub const STATUS_OK: c_int = 0;
pub const STATUS_NULL_POINTER: c_int = 1;
pub const STATUS_SAMPLING_FAILED: c_int = 2;

/// Borrow the host's NUL-terminated parameter string.
///
/// # Safety
/// `parameters` must be null or point to a NUL-terminated string that stays
/// valid for `'a`.
pub unsafe fn parameters_from_ptr<'a>(parameters: *const c_char) -> ConfigResult<&'a str> {
    if parameters.is_null() {
        return Err(ConfigError::NullParameters);
    }
    Ok(CStr::from_ptr(parameters).to_str()?)
}

/// Build a boxed [`SampledSource<M>`] and leak it to the host as an opaque handle.
///
/// # Safety
/// See [`parameters_from_ptr`].
pub unsafe fn create_source<M>(parameters: *const c_char) -> *mut c_void
where
    M: SourceModel + SourceFactory,
{
    let created = parameters_from_ptr(parameters).and_then(SampledSource::<M>::from_parameters);
    match created {
        Ok(source) => {
            let handle = Box::into_raw(Box::new(source)).cast::<c_void>();
            log::debug!("openmc_create_source: handle {:p}", handle);
            handle
        }
        Err(e) => {
            log::error!("openmc_create_source: {}", e);
            ptr::null_mut()
        }
    }
}

/// Sample one site into `out`, threading the host's seed.
///
/// # Safety
/// `handle` must come from [`create_source::<M>`] with the same `M` and not
/// yet be freed. `seed` and `out` must be valid for writes and must not be
/// shared with another thread for the duration of the call.
pub unsafe fn sample_source<M>(
    handle: *const c_void,
    seed: *mut u64,
    out: *mut ParticleRecord,
) -> c_int
where
    M: SourceModel,
{
    if handle.is_null() || seed.is_null() || out.is_null() {
        log::error!("openmc_sample_source: null handle, seed or output pointer");
        return STATUS_NULL_POINTER;
    }
    let source = &*handle.cast::<SampledSource<M>>();
    match source.sample(&mut *seed) {
        Ok(particle) => {
            out.write(particle);
            STATUS_OK
        }
        Err(e) => {
            log::error!("openmc_sample_source: {}", e);
            STATUS_SAMPLING_FAILED
        }
    }
}

/// Drop a handle returned by [`create_source::<M>`]. Null is ignored.
///
/// # Safety
/// `handle` must be null or come from [`create_source::<M>`] with the same
/// `M`, and must not be used afterwards.
pub unsafe fn free_source<M>(handle: *mut c_void)
where
    M: SourceModel,
{
    if handle.is_null() {
        return;
    }
    log::debug!("openmc_free_source: handle {:p}", handle);
    drop(Box::from_raw(handle.cast::<SampledSource<M>>()));
}

/// Export the `openmc_*` plugin symbols for one source model type.
///
/// The model must implement [`SourceModel`] and [`SourceFactory`]. Invoke at
/// most once per linked artifact, since the symbol names are fixed.
///
/// ```ignore
/// plasma_source_sampling::declare_source_plugin!(my_crate::PlasmaSource);
/// ```
#[macro_export]
macro_rules! declare_source_plugin {
    ($model:ty) => {
        /// # Safety
        /// `parameters` must be null or a NUL-terminated string.
        #[no_mangle]
        pub unsafe extern "C" fn openmc_create_source(
            parameters: *const ::std::os::raw::c_char,
        ) -> *mut ::std::ffi::c_void {
            $crate::plugin::create_source::<$model>(parameters)
        }

        /// # Safety
        /// `handle` must come from `openmc_create_source`; `seed` and `out`
        /// must be valid for writes.
        #[no_mangle]
        pub unsafe extern "C" fn openmc_sample_source(
            handle: *const ::std::ffi::c_void,
            seed: *mut u64,
            out: *mut $crate::particle::ParticleRecord,
        ) -> ::std::os::raw::c_int {
            $crate::plugin::sample_source::<$model>(handle, seed, out)
        }

        /// # Safety
        /// `handle` must be null or come from `openmc_create_source`.
        #[no_mangle]
        pub unsafe extern "C" fn openmc_free_source(handle: *mut ::std::ffi::c_void) {
            $crate::plugin::free_source::<$model>(handle)
        }
    };
}
