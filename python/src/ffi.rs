//! ffi.rs
//! Python-facing functions, exception types and the segment-model adapter.
//!
//! Exceptions:
//! - `ParameterError(ValueError)`: caller input violates a precondition.
//! - `OperationError(RuntimeError)`: the operation failed on valid input.
//! - `DecodeError(OperationError)`, `DecompressError(OperationError)`.

use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use tracing_subscriber::EnvFilter;

use bytelens_core::compression::{self, CompressionCodec};
use bytelens_core::config::InterpConfig;
use bytelens_core::encoding::{self, EncodingScheme};
use bytelens_core::memory::{ByteRangeReader, MemoryError, Segment, SegmentModel};
use bytelens_core::scalar::{self, Endianness, ScalarKind, ScalarValue};
use bytelens_core::types::{BytelensError, ErrorKind};

create_exception!(bytelens, ParameterError, PyValueError);
create_exception!(bytelens, OperationError, PyRuntimeError);
create_exception!(bytelens, DecodeError, OperationError);
create_exception!(bytelens, DecompressError, OperationError);

fn to_py_err(err: impl Into<BytelensError>) -> PyErr {
    let err = err.into();
    let msg = err.to_string();
    match err.kind() {
        ErrorKind::InvalidParameter => ParameterError::new_err(msg),
        ErrorKind::DecodeFailure => DecodeError::new_err(msg),
        ErrorKind::DecompressFailure => DecompressError::new_err(msg),
        ErrorKind::SegmentNotFound | ErrorKind::OutOfBounds | ErrorKind::ReadFailure => {
            OperationError::new_err(msg)
        }
    }
}

// ---------------------------------------------------------------------------
// Segment model adapter
// ---------------------------------------------------------------------------

/// Wraps any Python object exposing
/// `find_segment(address) -> (start, end) | segment_t | None` and
/// `read_bytes(address, size) -> bytes | None`.
struct PySegmentModel<'py> {
    obj: Bound<'py, PyAny>,
}

fn backend(err: PyErr) -> MemoryError {
    MemoryError::Backend(err.to_string())
}

impl SegmentModel for PySegmentModel<'_> {
    fn find_segment(&self, address: u64) -> Result<Option<Segment>, MemoryError> {
        let found = self.obj.call_method1("find_segment", (address,)).map_err(backend)?;
        if found.is_none() {
            return Ok(None);
        }

        // Plain (start, end) tuple, or an IDA-style segment with start_ea/end_ea.
        let (start, end): (u64, u64) = match found.extract() {
            Ok(bounds) => bounds,
            Err(_) => (
                found.getattr("start_ea").and_then(|v| v.extract::<u64>()).map_err(backend)?,
                found.getattr("end_ea").and_then(|v| v.extract::<u64>()).map_err(backend)?,
            ),
        };
        Ok(Some(Segment::new(String::new(), start, end)))
    }

    fn read_raw(&self, address: u64, size: usize) -> Result<Option<Vec<u8>>, MemoryError> {
        let raw = self.obj.call_method1("read_bytes", (address, size)).map_err(backend)?;
        if raw.is_none() {
            return Ok(None);
        }
        let bytes = raw.downcast::<PyBytes>().map_err(|e| backend(e.into()))?;
        Ok(Some(bytes.as_bytes().to_vec()))
    }
}

// ---------------------------------------------------------------------------
// Range reads
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (model, address, size, max_size = None))]
fn dump_bytes<'py>(
    py: Python<'py>,
    model: &Bound<'py, PyAny>,
    address: i128,
    size: i128,
    max_size: Option<usize>,
) -> PyResult<Bound<'py, PyBytes>> {
    let config = InterpConfig::new(max_size, None);
    let reader = ByteRangeReader::with_config(PySegmentModel { obj: model.clone() }, config);
    let data = reader.read_bytes(address, size).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &data))
}

// ---------------------------------------------------------------------------
// Scalar conversions
// ---------------------------------------------------------------------------

#[pyfunction]
fn convert_string(data: &[u8], encoding: &str) -> PyResult<String> {
    scalar::to_text(data, encoding).map_err(to_py_err)
}

#[pyfunction]
fn convert_hex(data: &[u8]) -> String {
    scalar::to_hex(data)
}

#[pyfunction]
fn convert_unsigned_long(data: &[u8], is_little_endian: bool) -> PyResult<u64> {
    scalar::to_u64(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_long(data: &[u8], is_little_endian: bool) -> PyResult<i64> {
    scalar::to_i64(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_unsigned_integer(data: &[u8], is_little_endian: bool) -> PyResult<u32> {
    scalar::to_u32(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_integer(data: &[u8], is_little_endian: bool) -> PyResult<i32> {
    scalar::to_i32(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_unsigned_short(data: &[u8], is_little_endian: bool) -> PyResult<u16> {
    scalar::to_u16(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_short(data: &[u8], is_little_endian: bool) -> PyResult<i16> {
    scalar::to_i16(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_unsigned_byte(data: &[u8]) -> PyResult<u8> {
    scalar::to_u8(data).map_err(to_py_err)
}

#[pyfunction]
fn convert_float(data: &[u8], is_little_endian: bool) -> PyResult<f32> {
    scalar::to_f32(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

#[pyfunction]
fn convert_double(data: &[u8], is_little_endian: bool) -> PyResult<f64> {
    scalar::to_f64(data, Endianness::from_little(is_little_endian)).map_err(to_py_err)
}

/// Generic dispatch by kind name (`"u32"`, `"double"`, `"hex"`, ...).
#[pyfunction]
#[pyo3(signature = (data, kind, is_little_endian = true))]
fn interpret(py: Python<'_>, data: &[u8], kind: &str, is_little_endian: bool) -> PyResult<PyObject> {
    let kind: ScalarKind = kind.parse().map_err(to_py_err)?;
    let value = scalar::interpret(data, kind, Endianness::from_little(is_little_endian))
        .map_err(to_py_err)?;
    let obj = match value {
        ScalarValue::Text(s) | ScalarValue::Hex(s) => s.into_py(py),
        ScalarValue::Unsigned(v) => v.into_py(py),
        ScalarValue::Signed(v) => v.into_py(py),
        ScalarValue::Float(v) => v.into_py(py),
    };
    Ok(obj)
}

// ---------------------------------------------------------------------------
// Payload decoding
// ---------------------------------------------------------------------------

#[pyfunction]
fn decode_base16<'py>(py: Python<'py>, encoded_string: &str) -> PyResult<Bound<'py, PyBytes>> {
    let data = encoding::decode_base16(encoded_string).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &data))
}

#[pyfunction]
fn decode_base64<'py>(py: Python<'py>, encoded_string: &str) -> PyResult<Bound<'py, PyBytes>> {
    let data = encoding::decode_base64(encoded_string).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &data))
}

#[pyfunction]
fn decode_base85<'py>(py: Python<'py>, encoded_string: &str) -> PyResult<Bound<'py, PyBytes>> {
    let data = encoding::decode_base85(encoded_string).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &data))
}

#[pyfunction]
fn decode<'py>(py: Python<'py>, encoded_string: &str, scheme: &str) -> PyResult<Bound<'py, PyBytes>> {
    let scheme: EncodingScheme = scheme.parse().map_err(to_py_err)?;
    let data = encoding::decode(encoded_string, scheme).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &data))
}

// ---------------------------------------------------------------------------
// Decompression
// ---------------------------------------------------------------------------

fn decompress_as<'py>(
    py: Python<'py>,
    data: &[u8],
    codec: CompressionCodec,
    max_output: Option<usize>,
) -> PyResult<Bound<'py, PyBytes>> {
    let out = compression::decompress_with_limit(data, codec, max_output).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &out))
}

#[pyfunction]
#[pyo3(signature = (compressed_data, max_output = None))]
fn decompress_zlib<'py>(py: Python<'py>, compressed_data: &[u8], max_output: Option<usize>) -> PyResult<Bound<'py, PyBytes>> {
    decompress_as(py, compressed_data, CompressionCodec::Zlib, max_output)
}

#[pyfunction]
#[pyo3(signature = (compressed_data, max_output = None))]
fn decompress_bzip2<'py>(py: Python<'py>, compressed_data: &[u8], max_output: Option<usize>) -> PyResult<Bound<'py, PyBytes>> {
    decompress_as(py, compressed_data, CompressionCodec::Bzip2, max_output)
}

#[pyfunction]
#[pyo3(signature = (compressed_data, max_output = None))]
fn decompress_lzma<'py>(py: Python<'py>, compressed_data: &[u8], max_output: Option<usize>) -> PyResult<Bound<'py, PyBytes>> {
    decompress_as(py, compressed_data, CompressionCodec::Lzma, max_output)
}

#[pyfunction]
#[pyo3(signature = (compressed_data, scheme, max_output = None))]
fn decompress<'py>(
    py: Python<'py>,
    compressed_data: &[u8],
    scheme: &str,
    max_output: Option<usize>,
) -> PyResult<Bound<'py, PyBytes>> {
    let codec: CompressionCodec = scheme.parse().map_err(to_py_err)?;
    decompress_as(py, compressed_data, codec, max_output)
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install a stderr `tracing` subscriber. Later calls keep the first one.
#[pyfunction]
#[pyo3(signature = (level = "info"))]
fn init_logging(level: &str) -> PyResult<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| ParameterError::new_err(e.to_string()))?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ParameterError", py.get_type_bound::<ParameterError>())?;
    m.add("OperationError", py.get_type_bound::<OperationError>())?;
    m.add("DecodeError", py.get_type_bound::<DecodeError>())?;
    m.add("DecompressError", py.get_type_bound::<DecompressError>())?;

    m.add_function(wrap_pyfunction!(dump_bytes, m)?)?;

    m.add_function(wrap_pyfunction!(convert_string, m)?)?;
    m.add_function(wrap_pyfunction!(convert_hex, m)?)?;
    m.add_function(wrap_pyfunction!(convert_unsigned_long, m)?)?;
    m.add_function(wrap_pyfunction!(convert_long, m)?)?;
    m.add_function(wrap_pyfunction!(convert_unsigned_integer, m)?)?;
    m.add_function(wrap_pyfunction!(convert_integer, m)?)?;
    m.add_function(wrap_pyfunction!(convert_unsigned_short, m)?)?;
    m.add_function(wrap_pyfunction!(convert_short, m)?)?;
    m.add_function(wrap_pyfunction!(convert_unsigned_byte, m)?)?;
    m.add_function(wrap_pyfunction!(convert_float, m)?)?;
    m.add_function(wrap_pyfunction!(convert_double, m)?)?;
    m.add_function(wrap_pyfunction!(interpret, m)?)?;

    m.add_function(wrap_pyfunction!(decode_base16, m)?)?;
    m.add_function(wrap_pyfunction!(decode_base64, m)?)?;
    m.add_function(wrap_pyfunction!(decode_base85, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;

    m.add_function(wrap_pyfunction!(decompress_zlib, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_bzip2, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_lzma, m)?)?;
    m.add_function(wrap_pyfunction!(decompress, m)?)?;

    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
