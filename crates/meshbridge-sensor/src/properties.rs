//! Mesh device property identifiers.
//!
//! Numeric property ids from the Bluetooth Mesh Device Properties
//! specification. The sensor characteristic registry keys its codecs on
//! these values.

pub const AVERAGE_AMBIENT_TEMPERATURE_IN_A_PERIOD_OF_DAY: u16 = 0x0001;
pub const AVERAGE_INPUT_CURRENT: u16 = 0x0002;
pub const AVERAGE_INPUT_VOLTAGE: u16 = 0x0003;
pub const AVERAGE_OUTPUT_CURRENT: u16 = 0x0004;
pub const AVERAGE_OUTPUT_VOLTAGE: u16 = 0x0005;
pub const CENTER_BEAM_INTENSITY_AT_FULL_POWER: u16 = 0x0006;
pub const CHROMATICITY_TOLERANCE: u16 = 0x0007;
pub const COLOR_RENDERING_INDEX_R9: u16 = 0x0008;
pub const COLOR_RENDERING_INDEX_RA: u16 = 0x0009;
pub const DEVICE_APPEARANCE: u16 = 0x000A;
pub const DEVICE_COUNTRY_OF_ORIGIN: u16 = 0x000B;
pub const DEVICE_DATE_OF_MANUFACTURE: u16 = 0x000C;
pub const DEVICE_ENERGY_USE_SINCE_TURN_ON: u16 = 0x000D;
pub const DEVICE_FIRMWARE_REVISION: u16 = 0x000E;
pub const DEVICE_GLOBAL_TRADE_ITEM_NUMBER: u16 = 0x000F;
pub const DEVICE_HARDWARE_REVISION: u16 = 0x0010;
pub const DEVICE_MANUFACTURER_NAME: u16 = 0x0011;
pub const DEVICE_MODEL_NUMBER: u16 = 0x0012;
pub const DEVICE_OPERATING_TEMPERATURE_RANGE_SPECIFICATION: u16 = 0x0013;
pub const DEVICE_OPERATING_TEMPERATURE_STATISTICAL_VALUES: u16 = 0x0014;
pub const DEVICE_OVER_TEMPERATURE_EVENT_STATISTICS: u16 = 0x0015;
pub const DEVICE_POWER_RANGE_SPECIFICATION: u16 = 0x0016;
pub const DEVICE_RUNTIME_SINCE_TURN_ON: u16 = 0x0017;
pub const DEVICE_RUNTIME_WARRANTY: u16 = 0x0018;
pub const DEVICE_SERIAL_NUMBER: u16 = 0x0019;
pub const DEVICE_SOFTWARE_REVISION: u16 = 0x001A;
pub const DEVICE_UNDER_TEMPERATURE_EVENT_STATISTICS: u16 = 0x001B;
pub const INDOOR_AMBIENT_TEMPERATURE_STATISTICAL_VALUES: u16 = 0x001C;
pub const INITIAL_CIE1931_CHROMATICITY_COORDINATES: u16 = 0x001D;
pub const INITIAL_CORRELATED_COLOR_TEMPERATURE: u16 = 0x001E;
pub const INITIAL_LUMINOUS_FLUX: u16 = 0x001F;
pub const INITIAL_PLANCKIAN_DISTANCE: u16 = 0x0020;
pub const INPUT_CURRENT_RANGE_SPECIFICATION: u16 = 0x0021;
pub const INPUT_CURRENT_STATISTICS: u16 = 0x0022;
pub const INPUT_OVER_CURRENT_EVENT_STATISTICS: u16 = 0x0023;
pub const INPUT_OVER_RIPPLE_VOLTAGE_EVENT_STATISTICS: u16 = 0x0024;
pub const INPUT_OVER_VOLTAGE_EVENT_STATISTICS: u16 = 0x0025;
pub const INPUT_UNDER_CURRENT_EVENT_STATISTICS: u16 = 0x0026;
pub const INPUT_UNDER_VOLTAGE_EVENT_STATISTICS: u16 = 0x0027;
pub const INPUT_VOLTAGE_RANGE_SPECIFICATION: u16 = 0x0028;
pub const INPUT_VOLTAGE_RIPPLE_SPECIFICATION: u16 = 0x0029;
pub const INPUT_VOLTAGE_STATISTICS: u16 = 0x002A;
pub const LIGHT_CONTROL_AMBIENT_LUX_LEVEL_ON: u16 = 0x002B;
pub const LIGHT_CONTROL_AMBIENT_LUX_LEVEL_PROLONG: u16 = 0x002C;
pub const LIGHT_CONTROL_AMBIENT_LUX_LEVEL_STANDBY: u16 = 0x002D;
pub const LIGHT_CONTROL_LIGHTNESS_ON: u16 = 0x002E;
pub const LIGHT_CONTROL_LIGHTNESS_PROLONG: u16 = 0x002F;
pub const LIGHT_CONTROL_LIGHTNESS_STANDBY: u16 = 0x0030;
pub const LIGHT_CONTROL_REGULATOR_ACCURACY: u16 = 0x0031;
pub const LIGHT_CONTROL_REGULATOR_KID: u16 = 0x0032;
pub const LIGHT_CONTROL_REGULATOR_KIU: u16 = 0x0033;
pub const LIGHT_CONTROL_REGULATOR_KPD: u16 = 0x0034;
pub const LIGHT_CONTROL_REGULATOR_KPU: u16 = 0x0035;
pub const LIGHT_CONTROL_TIME_FADE: u16 = 0x0036;
pub const LIGHT_CONTROL_TIME_FADE_ON: u16 = 0x0037;
pub const LIGHT_CONTROL_TIME_FADE_STANDBY_AUTO: u16 = 0x0038;
pub const LIGHT_CONTROL_TIME_FADE_STANDBY_MANUAL: u16 = 0x0039;
pub const LIGHT_CONTROL_TIME_OCCUPANCY_DELAY: u16 = 0x003A;
pub const LIGHT_CONTROL_TIME_PROLONG: u16 = 0x003B;
pub const LIGHT_CONTROL_TIME_RUN_ON: u16 = 0x003C;
pub const LUMEN_MAINTENANCE_FACTOR: u16 = 0x003D;
pub const LUMINOUS_EFFICACY: u16 = 0x003E;
pub const LUMINOUS_ENERGY_SINCE_TURN_ON: u16 = 0x003F;
pub const LUMINOUS_EXPOSURE: u16 = 0x0040;
pub const LUMINOUS_FLUX_RANGE: u16 = 0x0041;
pub const MOTION_SENSED: u16 = 0x0042;
pub const MOTION_THRESHOLD: u16 = 0x0043;
pub const OPEN_CIRCUIT_EVENT_STATISTICS: u16 = 0x0044;
pub const OUTDOOR_STATISTICAL_VALUES: u16 = 0x0045;
pub const OUTPUT_CURRENT_RANGE: u16 = 0x0046;
pub const OUTPUT_CURRENT_STATISTICS: u16 = 0x0047;
pub const OUTPUT_RIPPLE_VOLTAGE_SPECIFICATION: u16 = 0x0048;
pub const OUTPUT_VOLTAGE_RANGE: u16 = 0x0049;
pub const OUTPUT_VOLTAGE_STATISTICS: u16 = 0x004A;
pub const OVER_OUTPUT_RIPPLE_VOLTAGE_EVENT_STATISTICS: u16 = 0x004B;
pub const PEOPLE_COUNT: u16 = 0x004C;
pub const PRESENCE_DETECTED: u16 = 0x004D;
pub const PRESENT_AMBIENT_LIGHT_LEVEL: u16 = 0x004E;
pub const PRESENT_AMBIENT_TEMPERATURE: u16 = 0x004F;
pub const PRESENT_CIE1931_CHROMATICITY_COORDINATES: u16 = 0x0050;
pub const PRESENT_CORRELATED_COLOR_TEMPERATURE: u16 = 0x0051;
pub const PRESENT_DEVICE_INPUT_POWER: u16 = 0x0052;
pub const PRESENT_DEVICE_OPERATING_EFFICIENCY: u16 = 0x0053;
pub const PRESENT_DEVICE_OPERATING_TEMPERATURE: u16 = 0x0054;
pub const PRESENT_ILLUMINANCE: u16 = 0x0055;
pub const PRESENT_INDOOR_AMBIENT_TEMPERATURE: u16 = 0x0056;
pub const PRESENT_INPUT_CURRENT: u16 = 0x0057;
pub const PRESENT_INPUT_RIPPLE_VOLTAGE: u16 = 0x0058;
pub const PRESENT_INPUT_VOLTAGE: u16 = 0x0059;
pub const PRESENT_LUMINOUS_FLUX: u16 = 0x005A;
pub const PRESENT_OUTDOOR_AMBIENT_TEMPERATURE: u16 = 0x005B;
pub const PRESENT_OUTPUT_CURRENT: u16 = 0x005C;
pub const PRESENT_OUTPUT_VOLTAGE: u16 = 0x005D;
pub const PRESENT_PLANCKIAN_DISTANCE: u16 = 0x005E;
pub const PRESENT_RELATIVE_OUTPUT_RIPPLE_VOLTAGE: u16 = 0x005F;
pub const RELATIVE_DEVICE_ENERGY_USE_IN_A_PERIOD_OF_DAY: u16 = 0x0060;
pub const RELATIVE_DEVICE_RUNTIME_IN_A_GENERIC_LEVEL_RANGE: u16 = 0x0061;
pub const RELATIVE_EXPOSURE_TIME_IN_AN_ILLUMINANCE_RANGE: u16 = 0x0062;
pub const RELATIVE_RUNTIME_IN_A_CORRELATED_COLOR_TEMPERATURE_RANGE: u16 = 0x0063;
pub const RELATIVE_RUNTIME_IN_A_DEVICE_OPERATING_TEMPERATURE_RANGE: u16 = 0x0064;
pub const RELATIVE_RUNTIME_IN_AN_INPUT_CURRENT_RANGE: u16 = 0x0065;
pub const RELATIVE_RUNTIME_IN_AN_INPUT_VOLTAGE_RANGE: u16 = 0x0066;
pub const SHORT_CIRCUIT_EVENT_STATISTICS: u16 = 0x0067;
pub const TIME_SINCE_MOTION_SENSED: u16 = 0x0068;
pub const TIME_SINCE_PRESENCE_DETECTED: u16 = 0x0069;
pub const TOTAL_DEVICE_ENERGY_USE: u16 = 0x006A;
pub const TOTAL_DEVICE_OFF_ON_CYCLES: u16 = 0x006B;
pub const TOTAL_DEVICE_POWER_ON_CYCLES: u16 = 0x006C;
pub const TOTAL_DEVICE_POWER_ON_TIME: u16 = 0x006D;
pub const TOTAL_DEVICE_RUNTIME: u16 = 0x006E;
pub const TOTAL_LIGHT_EXPOSURE_TIME: u16 = 0x006F;
pub const TOTAL_LUMINOUS_ENERGY: u16 = 0x0070;
pub const DESIRED_AMBIENT_TEMPERATURE: u16 = 0x0071;
pub const PRECISE_TOTAL_DEVICE_ENERGY_USE: u16 = 0x0072;
pub const POWER_FACTOR: u16 = 0x0073;
pub const SENSOR_GAIN: u16 = 0x0074;
pub const PRECISE_PRESENT_AMBIENT_TEMPERATURE: u16 = 0x0075;
pub const PRESENT_AMBIENT_RELATIVE_HUMIDITY: u16 = 0x0076;
pub const PRESENT_AMBIENT_CARBONDIOXIDE_CONCENTRATION: u16 = 0x0077;
pub const PRESENT_AMBIENT_VOLATILE_ORGANIC_COMPOUNDS_CONCENTRATION: u16 = 0x0078;
pub const PRESENT_AMBIENT_NOISE: u16 = 0x0079;
pub const ACTIVE_ENERGY_LOAD_SIDE: u16 = 0x0080;
pub const ACTIVE_POWER_LOAD_SIDE: u16 = 0x0081;
pub const AIR_PRESSURE: u16 = 0x0082;
pub const APPARENT_ENERGY: u16 = 0x0083;
pub const APPARENT_POWER: u16 = 0x0084;
pub const APPARENT_WIND_DIRECTION: u16 = 0x0085;
pub const APPARENT_WIND_SPEED: u16 = 0x0086;
pub const DEW_POINT: u16 = 0x0087;
pub const EXTERNAL_SUPPLY_VOLTAGE: u16 = 0x0088;
pub const EXTERNAL_SUPPLY_VOLTAGE_FREQUENCY: u16 = 0x0089;
pub const GUST_FACTOR: u16 = 0x008A;
pub const HEAT_INDEX: u16 = 0x008B;
pub const LIGHT_DISTRIBUTION: u16 = 0x008C;
pub const LIGHT_SOURCE_CURRENT: u16 = 0x008D;
pub const LIGHT_SOURCE_ON_TIME_NOT_RESETTABLE: u16 = 0x008E;
pub const LIGHT_SOURCE_ON_TIME_RESETTABLE: u16 = 0x008F;
pub const LIGHT_SOURCE_OPEN_CIRCUIT_STATISTICS: u16 = 0x0090;
pub const LIGHT_SOURCE_OVERALL_FAILURES_STATISTICS: u16 = 0x0091;
pub const LIGHT_SOURCE_SHORT_CIRCUIT_STATISTICS: u16 = 0x0092;
pub const LIGHT_SOURCE_START_COUNTER_RESETTABLE: u16 = 0x0093;
pub const LIGHT_SOURCE_TEMPERATURE: u16 = 0x0094;
pub const LIGHT_SOURCE_THERMAL_DERATING_STATISTICS: u16 = 0x0095;
pub const LIGHT_SOURCE_THERMAL_SHUTDOWN_STATISTICS: u16 = 0x0096;
pub const LIGHT_SOURCE_TOTAL_POWER_ON_CYCLES: u16 = 0x0097;
pub const LIGHT_SOURCE_VOLTAGE: u16 = 0x0098;
pub const LUMINAIRE_COLOR: u16 = 0x0099;
pub const LUMINAIRE_IDENTIFICATION_NUMBER: u16 = 0x009A;
pub const LUMINAIRE_MANUFACTURER_GTIN: u16 = 0x009B;
pub const LUMINAIRE_NOMINAL_INPUT_POWER: u16 = 0x009C;
pub const LUMINAIRE_NOMINAL_MAXIMUM_AC_MAINS_VOLTAGE: u16 = 0x009D;
pub const LUMINAIRE_NOMINAL_MINIMUM_AC_MAINS_VOLTAGE: u16 = 0x009E;
pub const LUMINAIRE_POWER_AT_MINIMUM_DIM_LEVEL: u16 = 0x009F;
pub const LUMINAIRE_TIME_OF_MANUFACTURE: u16 = 0x00A0;
pub const MAGNETIC_DECLINATION: u16 = 0x00A1;
pub const MAGNETIC_FLUX_DENSITY_2D: u16 = 0x00A2;
pub const MAGNETIC_FLUX_DENSITY_3D: u16 = 0x00A3;
pub const NOMINAL_LIGHT_OUTPUT: u16 = 0x00A4;
pub const OVERALL_FAILURE_CONDITION: u16 = 0x00A5;
pub const POLLEN_CONCENTRATION: u16 = 0x00A6;
pub const PRESENT_INDOOR_RELATIVE_HUMIDITY: u16 = 0x00A7;
pub const PRESENT_OUTDOOR_RELATIVE_HUMIDITY: u16 = 0x00A8;
pub const PRESSURE: u16 = 0x00A9;
pub const RAINFALL: u16 = 0x00AA;
pub const RATED_MEDIAN_USEFUL_LIFE_OF_LUMINAIRE: u16 = 0x00AB;
pub const RATED_MEDIAN_USEFUL_LIGHT_SOURCE_STARTS: u16 = 0x00AC;
pub const REFERENCE_TEMPERATURE: u16 = 0x00AD;
pub const TOTAL_DEVICE_STARTS: u16 = 0x00AE;
pub const TRUE_WIND_DIRECTION: u16 = 0x00AF;
pub const TRUE_WIND_SPEED: u16 = 0x00B0;
pub const UV_INDEX: u16 = 0x00B1;
pub const WIND_CHILL: u16 = 0x00B2;
pub const LIGHT_SOURCE_TYPE: u16 = 0x00B3;
pub const LUMINAIRE_IDENTIFICATION_STRING: u16 = 0x00B4;
pub const OUTPUT_POWER_LIMITATION: u16 = 0x00B5;
pub const THERMAL_DERATING: u16 = 0x00B6;
pub const OUTPUT_CURRENT_PERCENT: u16 = 0x00B7;
