//! Host-side test suite: end-to-end frame scenarios through the real
//! backends, as the binary exercises them.

mod frame_tests;
