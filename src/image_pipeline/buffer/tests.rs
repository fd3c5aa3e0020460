#[cfg(test)]
mod tests {
    use crate::image_pipeline::common::error::CorrectionError;
    use crate::image_pipeline::buffer::types::{ImageBuffer, ReferencePoint};

    fn gradient(width: usize, height: usize) -> ImageBuffer {
        let mut samples = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&[x as u8, y as u8, (x + y) as u8, 255]);
            }
        }
        ImageBuffer::new(width, height, samples).unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let result = ImageBuffer::new(0, 4, Vec::new());
        assert!(matches!(result, Err(CorrectionError::InvalidDimensions(0, 4))));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = ImageBuffer::new(2, 2, vec![0u8; 15]);
        assert!(matches!(
            result,
            Err(CorrectionError::InvalidBufferLength { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_pixel_is_row_major() {
        let image = gradient(3, 2);
        assert_eq!(image.pixel(2, 1), Some([2, 1, 3, 255]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_reference_point_bounds() {
        let image = gradient(4, 3);
        assert!(ReferencePoint::within(&image, 3, 2).is_ok());
        assert!(matches!(
            ReferencePoint::within(&image, -1, 0),
            Err(CorrectionError::OutOfBounds { x: -1, y: 0, width: 4, height: 3 })
        ));
        assert!(ReferencePoint::within(&image, 4, 0).is_err());
        assert!(ReferencePoint::within(&image, 0, 3).is_err());
    }

    #[test]
    fn test_display_mapping_scales_down() {
        let image = gradient(200, 100);
        // Displayed at half size
        let point = ReferencePoint::from_display(&image, 50.7, 20.2, 100.0, 50.0).unwrap();
        assert_eq!((point.x(), point.y()), (101, 40));
    }

    #[test]
    fn test_display_mapping_scales_up() {
        let image = gradient(10, 10);
        let point = ReferencePoint::from_display(&image, 399.9, 0.0, 400.0, 400.0).unwrap();
        assert_eq!((point.x(), point.y()), (9, 0));
    }

    #[test]
    fn test_display_mapping_rejects_outside_clicks() {
        let image = gradient(10, 10);
        assert!(matches!(
            ReferencePoint::from_display(&image, -0.5, 1.0, 10.0, 10.0),
            Err(CorrectionError::OutOfBounds { .. })
        ));
        assert!(ReferencePoint::from_display(&image, 10.0, 1.0, 10.0, 10.0).is_err());
        assert!(ReferencePoint::from_display(&image, 1e300, 1.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_display_mapping_reports_non_finite_click() {
        let image = gradient(10, 10);
        let result = ReferencePoint::from_display(&image, f64::NAN, 3.0, 10.0, 10.0);
        match result {
            Err(CorrectionError::InvalidCoordinate { x, y }) => {
                assert!(x.is_nan());
                assert_eq!(y, 3.0);
            }
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_pixel_coordinates_floor() {
        let image = gradient(4, 3);
        let point = ReferencePoint::from_pixel(&image, 3.9, 0.2).unwrap();
        assert_eq!((point.x(), point.y()), (3, 0));
        assert!(matches!(
            ReferencePoint::from_pixel(&image, -0.1, 0.0),
            Err(CorrectionError::OutOfBounds { x: -1, y: 0, .. })
        ));
    }

    #[test]
    fn test_pixel_coordinates_reject_non_finite() {
        let image = gradient(4, 3);
        for (x, y) in [(f64::NAN, 0.0), (0.0, f64::NAN), (f64::INFINITY, 0.0), (0.0, f64::NEG_INFINITY)] {
            assert!(matches!(
                ReferencePoint::from_pixel(&image, x, y),
                Err(CorrectionError::InvalidCoordinate { .. })
            ));
        }
    }

    #[test]
    fn test_display_mapping_rejects_empty_surface() {
        let image = gradient(10, 10);
        assert!(matches!(
            ReferencePoint::from_display(&image, 1.0, 1.0, 0.0, 10.0),
            Err(CorrectionError::InvalidDimensions(0, 10))
        ));
    }
}
