mod gallery;
pub use gallery::GalleryView;

mod camera;
pub use camera::CameraView;
