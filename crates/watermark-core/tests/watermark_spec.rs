use image::{RgbImage, RgbaImage};
use speculate::speculate;

use watermark_core::*;

fn random_printable(len: usize, seed: u64) -> String {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.char(' '..='~')).collect()
}

fn zeros(height: u32, width: u32) -> Raster {
    Raster::from(RgbImage::new(width, height))
}

speculate! {
    describe "embed() and extract()" {
        it "should round trip for every bit depth with and without compression" {
            let text = "Generated by Example Studio, 2024. Alle Rechte vorbehalten: ä ö ü ß";
            for bit_depth in BitDepth::ALL {
                for use_compression in [true, false] {
                    let options = WatermarkOptions { bit_depth, use_compression };
                    let marked = embed(&zeros(64, 64), text, &options).unwrap();

                    assert_eq!(
                        extract(&marked, bit_depth),
                        text,
                        "depth {bit_depth}, compression {use_compression}"
                    );
                }
            }
        }

        it "should round trip on rasters with arbitrary content" {
            let carrier = Raster::from(RgbaImage::from_fn(48, 32, |x, y| {
                image::Rgba([(x * 5) as u8, (y * 7) as u8, (x ^ y) as u8, 255])
            }));
            let text = random_printable(200, 7);

            let marked = embed(&carrier, &text, &WatermarkOptions::default()).unwrap();

            assert_eq!(extract(&marked, BitDepth::Two), text);
        }

        it "should not change any channel by more than the bit depth allows" {
            let carrier = Raster::from(RgbImage::from_fn(32, 32, |x, y| {
                image::Rgb([(x * 8) as u8, (y * 8) as u8, 0xaa])
            }));
            let options = WatermarkOptions::default().with_bit_depth(BitDepth::Three);
            let marked = embed(&carrier, &random_printable(150, 3), &options).unwrap();

            for index in 0..carrier.unit_count() {
                let before = carrier.unit(index).unwrap();
                let after = marked.unit(index).unwrap();
                assert_eq!(before & !0b111, after & !0b111, "unit {index} changed above bit 2");
            }
        }

        it "should not mutate the input raster" {
            let carrier = zeros(64, 64);
            let copy = carrier.clone();

            let marked = embed(&carrier, "hello", &WatermarkOptions::default()).unwrap();

            assert_eq!(carrier, copy);
            assert_ne!(marked, copy);
            assert_eq!(marked.shape(), copy.shape());
        }

        it "should recover 'hello' from a 64x64x3 raster at bit depth 2" {
            let carrier = NormalizedRaster::zeros(64, 64, 3);
            let options = WatermarkOptions::default();

            let marked = embed(&carrier, "hello", &options).unwrap();

            assert_eq!(marked.shape(), RasterShape::new(64, 64, 3));
            assert_eq!(extract(&marked, BitDepth::Two), "hello");
        }
    }

    describe "normalized rasters" {
        it "should keep unvisited samples exact and change only low bits of visited ones" {
            let shape = RasterShape::new(20, 20, 3);
            let carrier = NormalizedRaster::from_fn(shape, |r, c, ch| {
                ((r * 31 + c * 7 + ch) % 97) as f32 / 97.3
            });
            let text = "hello";
            let options = WatermarkOptions::default();
            let visited = watermark::header_units(options.bit_depth)
                + options.bit_depth.units_for(pack(text, true).len());

            let marked = embed(&carrier, text, &options).unwrap();
            assert_eq!(extract(&marked, BitDepth::Two), text);

            let before = carrier.into_samples();
            let after = marked.into_samples();
            assert_eq!(visited, 40);
            for (index, (b, a)) in before.iter().zip(&after).enumerate() {
                if index < visited {
                    assert_eq!(
                        media::quantize(*b) & !0b11,
                        media::quantize(*a) & !0b11,
                        "sample {index} changed above bit 1"
                    );
                } else {
                    assert_eq!(b.to_bits(), a.to_bits(), "sample {index} was touched");
                }
            }
        }
    }

    describe "capacity" {
        it "should accept a payload of exactly the capacity" {
            // 16x16x3 = 768 units, 76 reserved, 1384 bits = flag + 172 characters
            let carrier = zeros(16, 16);
            let options = WatermarkOptions::default().with_compression(false);
            assert_eq!(compute_capacity(carrier.shape(), BitDepth::Two), 1384);
            let text = "a".repeat(172);

            let marked = embed(&carrier, &text, &options).unwrap();

            assert_eq!(extract(&marked, BitDepth::Two), text);
        }

        it "should reject a payload beyond the capacity" {
            let carrier = zeros(16, 16);
            let options = WatermarkOptions::default().with_compression(false);

            match embed(&carrier, &"a".repeat(173), &options) {
                Err(WatermarkError::CapacityExceeded { available, required }) => {
                    assert_eq!(available, 1384);
                    assert_eq!(required, 1392);
                }
                other => panic!("expected capacity exceeded, got {other:?}"),
            }
        }

        it "should reject 100 characters on an 8x8x3 raster at bit depth 2" {
            let carrier = zeros(8, 8);
            let text = random_printable(100, 100);

            let err = embed(&carrier, &text, &WatermarkOptions::default()).unwrap_err();

            assert!(matches!(err, WatermarkError::CapacityExceeded { available: 346, .. }));
            assert!(err.to_string().contains("Available capacity: 346 bits"));
        }
    }

    describe "text length" {
        it "should accept 1024 characters" {
            let text = random_printable(1024, 1024);
            let options = WatermarkOptions::default().with_compression(false);

            let marked = embed(&zeros(128, 128), &text, &options).unwrap();

            assert_eq!(extract(&marked, BitDepth::Two), text);
        }

        it "should reject 1025 characters" {
            let text = "a".repeat(1025);

            let err = embed(&zeros(128, 128), &text, &WatermarkOptions::default()).unwrap_err();

            assert!(matches!(err, WatermarkError::TextTooLong { length: 1025, max: 1024 }));
        }
    }

    describe "compression" {
        it "should pack repetitive text shorter than random text" {
            let repetitive = "watermark ".repeat(100);
            let random = random_printable(1000, 42);

            assert!(pack(&repetitive, true).len() < pack(&random, true).len());
            assert_eq!(pack(&repetitive, false).len(), (1 + 1000) * 8);
            assert_eq!(pack(&random, false).len(), (1 + 1000) * 8);
        }

        it "should never pack larger than the raw text" {
            let random = random_printable(64, 1);

            assert!(pack(&random, true).len() <= pack(&random, false).len());
            assert_eq!(unpack(&pack(&random, true)), random);
        }
    }

    describe "unmarked rasters" {
        it "should give an empty text for every bit depth" {
            for bit_depth in BitDepth::ALL {
                assert_eq!(extract(&zeros(64, 64), bit_depth), "");
                assert_eq!(extract(&NormalizedRaster::zeros(8, 8, 3), bit_depth), "");
                assert!(matches!(
                    extract_detailed(&zeros(64, 64), bit_depth),
                    Extraction::NotFound
                ));
            }
        }

        it "should not panic on random noise" {
            let mut rng = fastrand::Rng::with_seed(2024);
            for _ in 0..32 {
                let noise = RgbImage::from_fn(24, 24, |_, _| {
                    image::Rgb([rng.u8(..), rng.u8(..), rng.u8(..)])
                });
                for bit_depth in BitDepth::ALL {
                    let _ = extract(&noise, bit_depth);
                }
            }
        }
    }

    describe "bit depth mismatch" {
        it "should not panic when reading with another bit depth" {
            let text = random_printable(300, 9);
            for embedded_with in BitDepth::ALL {
                let options = WatermarkOptions::default().with_bit_depth(embedded_with);
                let marked = embed(&zeros(64, 64), &text, &options).unwrap();

                for read_with in BitDepth::ALL.into_iter().filter(|d| *d != embedded_with) {
                    let _ = extract_detailed(&marked, read_with);
                }
            }
        }
    }

    describe "batches" {
        it "should mark every raster alike" {
            let batch = vec![zeros(16, 16), zeros(32, 8), zeros(64, 64)];

            let marked = embed_batch(&batch, "batch", &WatermarkOptions::default()).unwrap();

            assert_eq!(extract_batch(&marked, BitDepth::Two), vec!["batch"; 3]);
        }
    }
}
