//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pnmedit_core::{Image, PixelGrid};
use pnmedit_io::write_image_mem;
use std::fs;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Every comparison
/// increments the index so failures can be located in the log.
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "pnmio")
    pub fn new(test_name: &str) -> Self {
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    pub fn compare_grids(&mut self, grid1: &PixelGrid, grid2: &PixelGrid) -> bool {
        self.index += 1;

        if grid1.dimensions() != grid2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                grid1.dimensions(),
                grid2.dimensions()
            );
            return self.fail(msg);
        }

        for y in 0..grid1.height() {
            for x in 0..grid1.width() {
                if grid1.get_pixel_unchecked(x, y) != grid2.get_pixel_unchecked(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: grid comparison for index {} - sample mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Compare two images: attributes, dimensions, selection and samples
    pub fn compare_images(&mut self, image1: &Image, image2: &Image) -> bool {
        self.index += 1;

        if image1 != image2 {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - {}x{} {} vs {}x{} {}",
                self.test_name,
                self.index,
                image1.width(),
                image1.height(),
                image1.color_model().name(),
                image2.width(),
                image2.height(),
                image2.color_model().name()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Write data under the regout directory for inspection.
    ///
    /// The file is named `<test>.<index>.<ext>`.
    ///
    /// # Returns
    ///
    /// The path that was written.
    pub fn write_data(&mut self, data: &[u8], ext: &str) -> TestResult<String> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        );

        fs::write(&local_path, data).map_err(|e| TestError::Write {
            path: local_path.clone(),
            message: e.to_string(),
        })?;
        Ok(local_path)
    }

    /// Encode an image as PNM and write it under the regout directory.
    pub fn write_image(&mut self, image: &Image) -> TestResult<String> {
        let data = write_image_mem(image, image.variant()).map_err(|e| TestError::Write {
            path: self.test_name.clone(),
            message: e.to_string(),
        })?;
        self.write_data(&data, "pnm")
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
