//! Mnemonic identifiers for decoded instructions.
//!
//! The discriminants are part of the stable numbering shared with the
//! table registry and downstream consumers; variants are only ever
//! appended.

numeric_enum_macro::numeric_enum! {
    #[repr(u16)]
    /// Kind of a decoded instruction.
    ///
    /// `XchgNop` never survives a successful decode: the encodings `90`,
    /// `48 90` and `66 90` are rewritten to [`Mnemonic::Nop`], everything
    /// else on that opcode to [`Mnemonic::Xchg`]. `ThreeDNow` keeps its
    /// suffix opcode in the immediate field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[non_exhaustive]
    pub enum Mnemonic {
        Invalid = 0,

        // Integer ALU
        Add = 1,
        Or = 2,
        Adc = 3,
        Sbb = 4,
        And = 5,
        Sub = 6,
        Xor = 7,
        Cmp = 8,
        Test = 9,
        Not = 10,
        Neg = 11,
        Mul = 12,
        Imul = 13,
        Div = 14,
        Idiv = 15,
        Inc = 16,
        Dec = 17,

        // Data movement
        Mov = 18,
        MovAbs = 19,
        MovCr = 20,
        MovDr = 21,
        Movsx = 22,
        Movzx = 23,
        Movsxd = 24,
        Lea = 25,
        Xchg = 26,
        XchgNop = 27,
        Bswap = 28,

        // Stack
        Push = 29,
        Pop = 30,
        Pusha = 31,
        Popa = 32,
        Pushf = 33,
        Popf = 34,
        Enter = 35,
        Leave = 36,

        // Control flow
        Call = 37,
        CallF = 38,
        Jmp = 39,
        JmpF = 40,
        Ret = 41,
        Retf = 42,
        Iret = 43,
        Int = 44,
        Int1 = 45,
        Int3 = 46,
        Into = 47,
        Loop = 48,
        Loope = 49,
        Loopne = 50,
        Jcxz = 51,
        Jo = 52,
        Jno = 53,
        Jb = 54,
        Jae = 55,
        Je = 56,
        Jne = 57,
        Jbe = 58,
        Ja = 59,
        Js = 60,
        Jns = 61,
        Jp = 62,
        Jnp = 63,
        Jl = 64,
        Jge = 65,
        Jle = 66,
        Jg = 67,

        // Condition-code byte set / conditional move
        Seto = 68,
        Setno = 69,
        Setb = 70,
        Setae = 71,
        Sete = 72,
        Setne = 73,
        Setbe = 74,
        Seta = 75,
        Sets = 76,
        Setns = 77,
        Setp = 78,
        Setnp = 79,
        Setl = 80,
        Setge = 81,
        Setle = 82,
        Setg = 83,
        Cmovo = 84,
        Cmovno = 85,
        Cmovb = 86,
        Cmovae = 87,
        Cmove = 88,
        Cmovne = 89,
        Cmovbe = 90,
        Cmova = 91,
        Cmovs = 92,
        Cmovns = 93,
        Cmovp = 94,
        Cmovnp = 95,
        Cmovl = 96,
        Cmovge = 97,
        Cmovle = 98,
        Cmovg = 99,

        // String and port I/O
        Movs = 100,
        Cmps = 101,
        Stos = 102,
        Lods = 103,
        Scas = 104,
        Ins = 105,
        Outs = 106,
        In = 107,
        Out = 108,
        Xlat = 109,

        // Flag and misc
        Clc = 110,
        Stc = 111,
        Cmc = 112,
        Cld = 113,
        Std = 114,
        Cli = 115,
        Sti = 116,
        Sahf = 117,
        Lahf = 118,
        Cbw = 119,
        Cwd = 120,
        Nop = 121,
        Hlt = 122,
        Ud2 = 123,
        Aaa = 124,
        Aas = 125,
        Aam = 126,
        Aad = 127,
        Daa = 128,
        Das = 129,

        // Shifts and double shifts
        Rol = 130,
        Ror = 131,
        Rcl = 132,
        Rcr = 133,
        Shl = 134,
        Shr = 135,
        Sar = 136,
        Shld = 137,
        Shrd = 138,

        // Bit tests and scans
        Bt = 139,
        Bts = 140,
        Btr = 141,
        Btc = 142,
        Bsf = 143,
        Bsr = 144,
        Tzcnt = 145,
        Lzcnt = 146,
        Popcnt = 147,

        // System
        Cpuid = 148,
        Rdtsc = 149,
        Rdtscp = 150,
        Rdmsr = 151,
        Wrmsr = 152,
        Rdpmc = 153,
        Syscall = 154,
        Sysenter = 155,
        Sysexit = 156,
        Clts = 157,
        Swapgs = 158,
        Monitor = 159,
        Mwait = 160,
        Sgdt = 161,
        Sidt = 162,
        Lgdt = 163,
        Lidt = 164,
        Smsw = 165,
        Lmsw = 166,
        Invlpg = 167,
        Lfence = 168,
        Mfence = 169,
        Sfence = 170,
        Clflush = 171,
        Ldmxcsr = 172,
        Stmxcsr = 173,
        Les = 174,
        Lds = 175,

        // Atomics and friends
        Cmpxchg = 176,
        Cmpxchg8b = 177,
        Cmpxchg16b = 178,
        Xadd = 179,
        Rdrand = 180,
        Rdseed = 181,
        Movnti = 182,
        Movbe = 183,
        Crc32 = 184,

        // MMX and 3DNow!
        Emms = 185,
        ThreeDNow = 186,
        Movd = 187,
        Movq = 188,
        Pand = 189,
        Por = 190,
        Pxor = 191,
        Pcmpeqb = 192,
        Pcmpeqw = 193,
        Pcmpeqd = 194,
        Psrlw = 195,
        Psrld = 196,
        Psrlq = 197,
        Psllw = 198,
        Pslld = 199,
        Psllq = 200,
        Pshufb = 201,
        Pshufd = 202,
        Palignr = 203,

        // SSE/SSE2
        Movups = 204,
        Movupd = 205,
        Movss = 206,
        Movsd = 207,
        Movaps = 208,
        Movapd = 209,
        Movdqa = 210,
        Movdqu = 211,
        Unpcklps = 212,
        Unpcklpd = 213,
        Unpckhps = 214,
        Unpckhpd = 215,
        Ucomiss = 216,
        Ucomisd = 217,
        Comiss = 218,
        Comisd = 219,
        Sqrtps = 220,
        Sqrtpd = 221,
        Sqrtss = 222,
        Sqrtsd = 223,
        Rsqrtps = 224,
        Rsqrtss = 225,
        Rcpps = 226,
        Rcpss = 227,
        Andps = 228,
        Andpd = 229,
        Andnps = 230,
        Andnpd = 231,
        Orps = 232,
        Orpd = 233,
        Xorps = 234,
        Xorpd = 235,
        Addps = 236,
        Addpd = 237,
        Addss = 238,
        Addsd = 239,
        Mulps = 240,
        Mulpd = 241,
        Mulss = 242,
        Mulsd = 243,
        Subps = 244,
        Subpd = 245,
        Subss = 246,
        Subsd = 247,
        Minps = 248,
        Minpd = 249,
        Minss = 250,
        Minsd = 251,
        Divps = 252,
        Divpd = 253,
        Divss = 254,
        Divsd = 255,
        Maxps = 256,
        Maxpd = 257,
        Maxss = 258,
        Maxsd = 259,
        Cvtps2pd = 260,
        Cvtpd2ps = 261,
        Cvtss2sd = 262,
        Cvtsd2ss = 263,
        Cvtdq2ps = 264,
        Cvtps2dq = 265,
        Cvtsi2ss = 266,
        Cvtsi2sd = 267,
        Cvtss2si = 268,
        Cvtsd2si = 269,
        Cvttss2si = 270,
        Cvttsd2si = 271,
        Cmpps = 272,
        Cmppd = 273,
        Cmpss = 274,
        Cmpsd = 275,
        Shufps = 276,
        Shufpd = 277,

        // AVX / AVX-512
        Vzeroupper = 278,
        Vzeroall = 279,
        Vmovups = 280,
        Vmovupd = 281,
        Vmovaps = 282,
        Vmovapd = 283,
        Vmovss = 284,
        Vmovsd = 285,
        Vmovdqa = 286,
        Vmovdqu = 287,
        Vaddps = 288,
        Vaddpd = 289,
        Vaddss = 290,
        Vaddsd = 291,
        Vmulps = 292,
        Vmulpd = 293,
        Vsubps = 294,
        Vsubpd = 295,
        Vminps = 296,
        Vminpd = 297,
        Vdivps = 298,
        Vdivpd = 299,
        Vmaxps = 300,
        Vmaxpd = 301,
        Vsqrtps = 302,
        Vsqrtpd = 303,
        Vandps = 304,
        Vandpd = 305,
        Vorps = 306,
        Vorpd = 307,
        Vxorps = 308,
        Vxorpd = 309,
        Vcmpps = 310,
        Vcmppd = 311,
        Vaddph = 312,
        Vbroadcastss = 313,
        Vinsertf128 = 314,
        Vextractf128 = 315,
        Vfmadd132ps = 316,
        Vfmadd132pd = 317,
        Vfmadd213ps = 318,
        Vfmadd213pd = 319,
        Vfmadd231ps = 320,
        Vfmadd231pd = 321,
        Vpgatherdd = 322,
        Vpgatherdq = 323,
        Vblendvps = 324,
        Vblendvpd = 325,
        Vpblendvb = 326,

        // Opmask registers
        Kandw = 327,
        Korw = 328,
        Kxorw = 329,
        Knotw = 330,
        Kmovw = 331,

        // BMI1/BMI2
        Andn = 332,
        Bextr = 333,
        Blsr = 334,
        Blsmsk = 335,
        Blsi = 336,
        Shlx = 337,
        Sarx = 338,
        Shrx = 339,
    }
}

impl Default for Mnemonic {
    fn default() -> Self {
        Mnemonic::Invalid
    }
}
