// benches/dispatch_bench.rs
//! Dispatch overhead: override vs pass-through

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gl_identity_shim::interception::query::{
    GLenum, GLubyte, GLuint, GL_EXTENSIONS, GL_RENDERER, GL_VENDOR,
};
use gl_identity_shim::{Dispatcher, FunctionTable, OverrideStore};
use std::os::raw::c_void;

unsafe extern "C" fn fake_get_string(_name: GLenum) -> *const GLubyte {
    c"genuine".as_ptr().cast()
}

unsafe extern "C" fn fake_get_stringi(_name: GLenum, _index: GLuint) -> *const GLubyte {
    c"GL_OES_EGL_image".as_ptr().cast()
}

fn dispatcher() -> Dispatcher<FunctionTable> {
    let table = FunctionTable::new()
        .with(c"glGetString", fake_get_string as *const c_void)
        .with(c"glGetStringi", fake_get_stringi as *const c_void);
    let dispatcher = Dispatcher::new(OverrideStore::with_defaults(), table);
    dispatcher.store().ensure_loaded();
    dispatcher
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = dispatcher();

    c.bench_function("get_string_override", |b| {
        b.iter(|| unsafe { dispatcher.get_string(black_box(GL_VENDOR)) })
    });

    c.bench_function("get_string_passthrough", |b| {
        b.iter(|| unsafe { dispatcher.get_string(black_box(GL_EXTENSIONS)) })
    });

    c.bench_function("get_stringi_passthrough", |b| {
        b.iter(|| unsafe { dispatcher.get_stringi(black_box(GL_RENDERER), black_box(3)) })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
